/// Built-in skills bank, used when `SKILLS_PATH` is not configured.
/// Labels must stay unique ignoring case.
pub const DEFAULT_SKILLS: &[&str] = &[
    // Languages
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "C",
    "C++",
    "C#",
    "Go",
    "Rust",
    "Ruby",
    "PHP",
    "Swift",
    "Kotlin",
    "Scala",
    "R",
    "MATLAB",
    "SQL",
    "Bash",
    "HTML",
    "CSS",
    // Frameworks & libraries
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Django",
    "Flask",
    "FastAPI",
    "Spring Boot",
    "Express",
    "TensorFlow",
    "PyTorch",
    "Keras",
    "Scikit-learn",
    "Pandas",
    "NumPy",
    "Spark",
    "Hadoop",
    // Data & infrastructure
    "MySQL",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "Elasticsearch",
    "Kafka",
    "Docker",
    "Kubernetes",
    "Terraform",
    "Ansible",
    "Jenkins",
    "Git",
    "Linux",
    "AWS",
    "Azure",
    "GCP",
    "Tableau",
    "Power BI",
    "Excel",
    // Disciplines
    "Machine Learning",
    "Deep Learning",
    "Data Analysis",
    "Data Science",
    "Data Visualization",
    "Statistics",
    "NLP",
    "Computer Vision",
    "Big Data",
    "ETL",
    "REST",
    "Microservices",
    "DevOps",
    "CI/CD",
    "Cloud Computing",
    "Cybersecurity",
    "Networking",
    "Agile",
    "Scrum",
    "Project Management",
    "UI/UX",
    "Figma",
    "Testing",
    "Selenium",
    "Android",
    "iOS",
    "Blockchain",
    // Soft skills
    "Communication",
    "Leadership",
    "Teamwork",
    "Problem Solving",
];
