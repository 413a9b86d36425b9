//! Match scoring and missing-skill ranking.

use aho_corasick::AhoCorasick;

use crate::report::{MatchReport, SkillSet};

/// Versatility bonus cap.
const MAX_BONUS: f64 = 5.0;

/// Score a résumé skill set against a job-description skill set.
///
/// The base score is the covered fraction of job skills; a capped versatility
/// bonus rewards résumés with relevant skills beyond the overlap. An empty
/// job set scores 0.0 by policy (never a division error), and the total is
/// clamped to 100.0.
#[tracing::instrument(skip_all, fields(job = job.len(), resume = resume.len()))]
pub fn score_match(job: &SkillSet, resume: &SkillSet, job_text: &str) -> MatchReport {
    if job.is_empty() {
        return MatchReport {
            match_percentage: 0.0,
            resume_skills: resume.to_vec(),
            job_skills: Vec::new(),
            missing_skills: Vec::new(),
        };
    }

    let common = job.common_count(resume);
    let base = round1(common as f64 / job.len() as f64 * 100.0);
    let bonus = MAX_BONUS.min((resume.len() - common) as f64 / 5.0);
    let match_percentage = round1(100.0_f64.min(base + bonus));

    MatchReport {
        match_percentage,
        resume_skills: resume.to_vec(),
        job_skills: job.to_vec(),
        missing_skills: rank_missing(job, resume, job_text),
    }
}

/// Round to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Job skills absent from the résumé, most important first.
///
/// Importance is the case-insensitive occurrence count of the skill in the
/// job-description text. Ties break on first-occurrence position (earlier
/// wins); skills that never occur verbatim rank last, lexicographically.
fn rank_missing(job: &SkillSet, resume: &SkillSet, job_text: &str) -> Vec<String> {
    let missing: Vec<String> = job.missing_from(resume).map(str::to_string).collect();
    if missing.is_empty() {
        return missing;
    }

    let automaton = AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(&missing)
        .expect("automaton over a small skill set");

    let mut counts = vec![0_usize; missing.len()];
    let mut first_pos = vec![usize::MAX; missing.len()];
    for mat in automaton.find_overlapping_iter(job_text) {
        let idx = mat.pattern().as_usize();
        counts[idx] += 1;
        first_pos[idx] = first_pos[idx].min(mat.start());
    }

    let mut order: Vec<usize> = (0..missing.len()).collect();
    // Stable sort; full ties keep the lexicographic order of `missing`.
    order.sort_by(|&a, &b| {
        counts[b]
            .cmp(&counts[a])
            .then_with(|| first_pos[a].cmp(&first_pos[b]))
    });
    order.into_iter().map(|i| missing[i].clone()).collect()
}
