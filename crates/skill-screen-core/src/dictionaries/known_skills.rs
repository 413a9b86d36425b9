//! Canonical skill vocabulary.
//!
//! Lower-case, already-normalized skill terms matched verbatim against
//! n-gram candidates. Multi-word entries match 2- and 3-gram candidates.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Known skill terms and tools.
pub static KNOWN_SKILLS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Programming languages
    set.extend([
        "python",
        "java",
        "javascript",
        "c++",
        "c#",
        "ruby",
        "php",
        "swift",
        "golang",
        "kotlin",
        "typescript",
        "scala",
        "perl",
        "r",
        "rust",
        "haskell",
        "matlab",
        "julia",
        "dart",
        "sql",
    ]);

    // Frameworks and libraries
    set.extend([
        "react",
        "angular",
        "vue",
        "django",
        "flask",
        "spring",
        "express",
        "laravel",
        "rails",
        "bootstrap",
        "jquery",
        "pandas",
        "tensorflow",
        "pytorch",
        "scikit-learn",
        "numpy",
        "matplotlib",
        "keras",
        "nextjs",
        "flutter",
        "electron",
        "svelte",
        "fastapi",
        "tailwind",
        "node.js",
        "nodejs",
    ]);

    // Databases
    set.extend([
        "mysql",
        "postgresql",
        "mongodb",
        "oracle",
        "sql server",
        "sqlite",
        "cassandra",
        "redis",
        "dynamodb",
        "firebase",
        "elasticsearch",
        "neo4j",
        "mariadb",
        "couchbase",
        "hbase",
    ]);

    // Cloud and DevOps
    set.extend([
        "aws",
        "azure",
        "gcp",
        "google cloud",
        "docker",
        "kubernetes",
        "jenkins",
        "terraform",
        "ansible",
        "chef",
        "puppet",
        "circleci",
        "travis",
        "github actions",
        "gitlab ci",
        "bitbucket pipelines",
        "prometheus",
        "grafana",
        "datadog",
        "nginx",
        "apache",
    ]);

    // Other technical skills
    set.extend([
        "git",
        "svn",
        "mercurial",
        "rest",
        "graphql",
        "soap",
        "agile",
        "scrum",
        "kanban",
        "ci/cd",
        "machine learning",
        "deep learning",
        "data science",
        "big data",
        "data mining",
        "blockchain",
        "microservices",
        "serverless",
        "websocket",
        "oauth",
        "jwt",
        "saml",
        "ldap",
        "active directory",
    ]);

    // Measurable professional skills
    set.extend([
        "public speaking",
        "technical writing",
        "data analysis",
        "project management",
        "team leadership",
        "requirements gathering",
        "ux research",
        "test automation",
        "stakeholder management",
    ]);

    set
});
