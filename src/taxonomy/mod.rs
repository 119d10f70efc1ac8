//! Static skill reference data shared by every analysis.
//!
//! All tables here are immutable for the process lifetime and safe to read
//! from concurrent analyses. Declaration order is contractual: tier
//! assignment and domain tie-breaking both resolve to the first entry that
//! matches, so reordering a table changes observable results.

use serde::{Deserialize, Serialize};

/// Proficiency tier used by the tiered skill database and role requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Beginner => "beginner",
            Tier::Intermediate => "intermediate",
            Tier::Advanced => "advanced",
        }
    }
}

/// A flat vocabulary category used by the resume structurer's skill scan.
pub struct VocabularyCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

/// Skill mentions searched for in resume text, by category. Substring
/// matching is case-insensitive and has no word-boundary guard, so short
/// entries ("r", "go") can match inside unrelated words. Known limitation.
pub const EXTRACTION_VOCABULARY: &[VocabularyCategory] = &[
    VocabularyCategory {
        name: "programming_languages",
        skills: &[
            "python", "r", "java", "scala", "sql", "javascript", "c++", "c#", "matlab", "sas",
            "spss", "julia", "go", "rust", "kotlin",
        ],
    },
    VocabularyCategory {
        name: "data_science_tools",
        skills: &[
            "pandas",
            "numpy",
            "scikit-learn",
            "tensorflow",
            "pytorch",
            "keras",
            "matplotlib",
            "seaborn",
            "plotly",
            "bokeh",
            "jupyter",
            "anaconda",
            "spyder",
            "rstudio",
            "tableau",
            "power bi",
            "qlik",
        ],
    },
    VocabularyCategory {
        name: "machine_learning",
        skills: &[
            "machine learning",
            "deep learning",
            "neural networks",
            "nlp",
            "computer vision",
            "reinforcement learning",
            "supervised learning",
            "unsupervised learning",
            "regression",
            "classification",
            "clustering",
            "random forest",
            "svm",
            "decision trees",
            "gradient boosting",
        ],
    },
    VocabularyCategory {
        name: "databases",
        skills: &[
            "mysql",
            "postgresql",
            "mongodb",
            "cassandra",
            "redis",
            "elasticsearch",
            "oracle",
            "sql server",
            "sqlite",
            "hive",
            "spark sql",
        ],
    },
    VocabularyCategory {
        name: "cloud_platforms",
        skills: &[
            "aws",
            "azure",
            "google cloud",
            "gcp",
            "docker",
            "kubernetes",
            "apache spark",
            "hadoop",
            "kafka",
            "airflow",
            "jenkins",
        ],
    },
    VocabularyCategory {
        name: "analytics_tools",
        skills: &[
            "excel",
            "google analytics",
            "mixpanel",
            "segment",
            "looker",
            "databricks",
            "snowflake",
            "redshift",
            "bigquery",
        ],
    },
];

/// A skill category with three proficiency tiers.
pub struct SkillCategory {
    pub name: &'static str,
    pub beginner: &'static [&'static str],
    pub intermediate: &'static [&'static str],
    pub advanced: &'static [&'static str],
}

impl SkillCategory {
    /// Tier lists in ascending proficiency order.
    pub fn tiers(&self) -> [(Tier, &'static [&'static str]); 3] {
        [
            (Tier::Beginner, self.beginner),
            (Tier::Intermediate, self.intermediate),
            (Tier::Advanced, self.advanced),
        ]
    }
}

/// Tiered skill database used for job-skill extraction, tier analysis and
/// recommendation priorities.
pub const SKILL_DATABASE: &[SkillCategory] = &[
    SkillCategory {
        name: "programming_languages",
        beginner: &["Python", "SQL", "R", "JavaScript", "HTML", "CSS"],
        intermediate: &["Java", "C++", "Scala", "Go", "Ruby", "PHP"],
        advanced: &["Rust", "Julia", "Kotlin", "Swift", "C#", "MATLAB"],
    },
    SkillCategory {
        name: "data_science_libraries",
        beginner: &["Pandas", "NumPy", "Matplotlib", "Seaborn", "Plotly"],
        intermediate: &["Scikit-learn", "TensorFlow", "Keras", "PyTorch", "OpenCV"],
        advanced: &["JAX", "Hugging Face", "MLflow", "Kubeflow", "Apache Spark"],
    },
    SkillCategory {
        name: "machine_learning",
        beginner: &[
            "Linear Regression",
            "Logistic Regression",
            "Decision Trees",
            "K-Means",
        ],
        intermediate: &[
            "Random Forest",
            "SVM",
            "Neural Networks",
            "NLP",
            "Computer Vision",
        ],
        advanced: &[
            "Deep Learning",
            "Reinforcement Learning",
            "GANs",
            "Transformer Models",
            "MLOps",
        ],
    },
    SkillCategory {
        name: "databases",
        beginner: &["MySQL", "SQLite", "PostgreSQL", "Excel"],
        intermediate: &["MongoDB", "Redis", "Cassandra", "Neo4j"],
        advanced: &["Elasticsearch", "Apache Kafka", "ClickHouse", "Snowflake"],
    },
    SkillCategory {
        name: "cloud_platforms",
        beginner: &["AWS S3", "Google Drive", "Dropbox"],
        intermediate: &["AWS EC2", "Azure", "Google Cloud Platform", "Docker"],
        advanced: &["Kubernetes", "Apache Airflow", "Terraform", "Jenkins"],
    },
    SkillCategory {
        name: "data_visualization",
        beginner: &["Excel Charts", "Google Sheets", "Matplotlib", "Seaborn"],
        intermediate: &["Tableau", "Power BI", "Plotly", "D3.js"],
        advanced: &["Looker", "Qlik Sense", "Custom Dashboards", "Real-time Viz"],
    },
    SkillCategory {
        name: "analytics_tools",
        beginner: &["Google Analytics", "Excel Pivot Tables"],
        intermediate: &["Jupyter Notebooks", "RStudio", "Databricks"],
        advanced: &["Apache Zeppelin", "MLflow", "Weights & Biases"],
    },
    SkillCategory {
        name: "soft_skills",
        beginner: &["Communication", "Teamwork", "Problem Solving"],
        intermediate: &["Project Management", "Leadership", "Presentation Skills"],
        advanced: &[
            "Strategic Thinking",
            "Mentoring",
            "Cross-functional Collaboration",
        ],
    },
];

/// Canonical skill name with its alternate surface forms. Resolution is
/// bidirectional: an alternate maps to its canonical, and a canonical maps
/// to itself.
pub struct Synonym {
    pub canonical: &'static str,
    pub alternates: &'static [&'static str],
}

pub const SYNONYMS: &[Synonym] = &[
    Synonym {
        canonical: "machine learning",
        alternates: &["ml", "artificial intelligence", "ai"],
    },
    Synonym {
        canonical: "python",
        alternates: &["python programming", "python development"],
    },
    Synonym {
        canonical: "sql",
        alternates: &["structured query language", "database queries"],
    },
    Synonym {
        canonical: "tensorflow",
        alternates: &["tf", "tensor flow"],
    },
    Synonym {
        canonical: "pytorch",
        alternates: &["torch"],
    },
    Synonym {
        canonical: "data visualization",
        alternates: &["data viz", "visualization", "charting"],
    },
    Synonym {
        canonical: "amazon web services",
        alternates: &["aws"],
    },
    Synonym {
        canonical: "google cloud platform",
        alternates: &["gcp", "google cloud"],
    },
    Synonym {
        canonical: "microsoft azure",
        alternates: &["azure"],
    },
    Synonym {
        canonical: "natural language processing",
        alternates: &["nlp"],
    },
    Synonym {
        canonical: "computer vision",
        alternates: &["cv", "image processing"],
    },
];

/// Resolve a cleaned (lower-cased, punctuation-free) term to its canonical
/// form, if it is a known synonym or canonical name.
pub fn canonical_for(term: &str) -> Option<&'static str> {
    SYNONYMS
        .iter()
        .find(|s| s.canonical == term || s.alternates.contains(&term))
        .map(|s| s.canonical)
}

/// Alternate surface forms for a skill, empty when none are registered.
pub fn alternates_of(skill: &str) -> &'static [&'static str] {
    SYNONYMS
        .iter()
        .find(|s| s.canonical == skill)
        .map(|s| s.alternates)
        .unwrap_or(&[])
}

/// True when the lower-cased skill appears verbatim in some category's
/// beginner tier.
pub fn is_beginner_skill(skill: &str) -> bool {
    SKILL_DATABASE
        .iter()
        .any(|c| c.beginner.iter().any(|s| s.to_lowercase() == skill))
}

/// Skill requirements for a known job role.
pub struct RoleRequirement {
    pub role: &'static str,
    pub core_skills: &'static [&'static str],
    pub preferred_skills: &'static [&'static str],
    pub experience_level: Tier,
}

pub const ROLE_REQUIREMENTS: &[RoleRequirement] = &[
    RoleRequirement {
        role: "Data Scientist",
        core_skills: &["Python", "SQL", "Machine Learning", "Statistics", "Data Visualization"],
        preferred_skills: &["R", "TensorFlow", "PyTorch", "Tableau", "AWS"],
        experience_level: Tier::Intermediate,
    },
    RoleRequirement {
        role: "Data Analyst",
        core_skills: &["SQL", "Excel", "Python", "Data Visualization", "Statistics"],
        preferred_skills: &["Tableau", "Power BI", "R", "Google Analytics"],
        experience_level: Tier::Beginner,
    },
    RoleRequirement {
        role: "Machine Learning Engineer",
        core_skills: &["Python", "Machine Learning", "TensorFlow", "PyTorch", "MLOps"],
        preferred_skills: &["Docker", "Kubernetes", "AWS", "Apache Spark"],
        experience_level: Tier::Advanced,
    },
    RoleRequirement {
        role: "Data Engineer",
        core_skills: &["Python", "SQL", "Apache Spark", "ETL", "Cloud Platforms"],
        preferred_skills: &["Kafka", "Airflow", "Docker", "Kubernetes"],
        experience_level: Tier::Intermediate,
    },
    RoleRequirement {
        role: "Business Intelligence Analyst",
        core_skills: &["SQL", "Tableau", "Power BI", "Excel", "Data Modeling"],
        preferred_skills: &["Python", "R", "DAX", "ETL Tools"],
        experience_level: Tier::Beginner,
    },
    RoleRequirement {
        role: "Research Scientist",
        core_skills: &["Python", "R", "Statistics", "Machine Learning", "Research Methods"],
        preferred_skills: &["Deep Learning", "Publications", "Mathematics", "Domain Expertise"],
        experience_level: Tier::Advanced,
    },
];

/// Look up requirements for a role by exact name.
pub fn role_requirement(role: &str) -> Option<&'static RoleRequirement> {
    ROLE_REQUIREMENTS.iter().find(|r| r.role == role)
}

/// Direction of market demand for a skill. Illustrative only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Rising,
    Stable,
    Declining,
}

/// Illustrative market figures for a skill. These are fixed constants, not
/// sourced from live job-market data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketTrend {
    pub demand: u8,
    pub trend: TrendDirection,
    pub avg_salary: u32,
}

const MARKET_TRENDS: &[(&str, MarketTrend)] = &[
    ("python", MarketTrend { demand: 95, trend: TrendDirection::Rising, avg_salary: 85_000 }),
    ("machine learning", MarketTrend { demand: 90, trend: TrendDirection::Rising, avg_salary: 95_000 }),
    ("sql", MarketTrend { demand: 85, trend: TrendDirection::Stable, avg_salary: 75_000 }),
    ("aws", MarketTrend { demand: 88, trend: TrendDirection::Rising, avg_salary: 90_000 }),
    ("tableau", MarketTrend { demand: 80, trend: TrendDirection::Stable, avg_salary: 80_000 }),
    ("tensorflow", MarketTrend { demand: 85, trend: TrendDirection::Rising, avg_salary: 100_000 }),
    ("r", MarketTrend { demand: 70, trend: TrendDirection::Declining, avg_salary: 78_000 }),
    ("excel", MarketTrend { demand: 75, trend: TrendDirection::Stable, avg_salary: 65_000 }),
];

/// Default figures for skills without a tracked trend.
const UNKNOWN_SKILL_TREND: MarketTrend = MarketTrend {
    demand: 60,
    trend: TrendDirection::Stable,
    avg_salary: 70_000,
};

/// Market figures for a skill (case-insensitive), falling back to neutral
/// defaults for untracked skills.
pub fn market_trend(skill: &str) -> MarketTrend {
    let skill_lower = skill.to_lowercase();
    MARKET_TRENDS
        .iter()
        .find(|(name, _)| *name == skill_lower)
        .map(|(_, trend)| *trend)
        .unwrap_or(UNKNOWN_SKILL_TREND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_resolution_is_bidirectional() {
        assert_eq!(canonical_for("ml"), Some("machine learning"));
        assert_eq!(canonical_for("machine learning"), Some("machine learning"));
        assert_eq!(canonical_for("gcp"), Some("google cloud platform"));
        assert_eq!(canonical_for("cobol"), None);
    }

    #[test]
    fn beginner_membership_is_exact_and_lowercase() {
        assert!(is_beginner_skill("python"));
        assert!(is_beginner_skill("excel"));
        assert!(!is_beginner_skill("rust"));
        // Input is expected pre-lowered; mixed case does not match.
        assert!(!is_beginner_skill("Python"));
    }

    #[test]
    fn role_lookup_by_exact_name() {
        let role = role_requirement("Data Scientist").unwrap();
        assert_eq!(role.experience_level, Tier::Intermediate);
        assert!(role.core_skills.contains(&"Machine Learning"));
        assert!(role_requirement("data scientist").is_none());
    }

    #[test]
    fn market_trend_falls_back_to_default() {
        let known = market_trend("Python");
        assert_eq!(known.demand, 95);
        assert_eq!(known.trend, TrendDirection::Rising);

        let unknown = market_trend("fortran");
        assert_eq!(unknown.demand, 60);
        assert_eq!(unknown.avg_salary, 70_000);
    }

    #[test]
    fn database_category_order_is_stable() {
        // Tier assignment resolves to the first matching category, so the
        // declared order is part of the contract.
        let names: Vec<&str> = SKILL_DATABASE.iter().map(|c| c.name).collect();
        assert_eq!(names[0], "programming_languages");
        assert_eq!(names[1], "data_science_libraries");
        assert_eq!(*names.last().unwrap(), "soft_skills");
    }
}
