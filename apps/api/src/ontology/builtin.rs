//! Built-in skill table. Each canonical name is added to its own alias set on load,
//! so it only needs to be listed here when it also reads naturally as an alias.

pub(super) const BUILTIN_SKILLS: &[(&str, &[&str])] = &[
    // Software development
    ("python", &["python"]),
    ("c/c++", &["c++", "c"]),
    ("java", &["java"]),
    ("c#", &["c#", ".net"]),
    ("go", &["go", "golang"]),
    (
        "backend",
        &[
            "backend",
            "django",
            "spring",
            "springboot",
            "nodejs",
            "express",
            "php",
            "api",
            "microservices",
            "rest",
        ],
    ),
    (
        "frontend",
        &[
            "frontend",
            "react",
            "angular",
            "vue",
            "javascript",
            "css",
            "html",
            "typescript",
        ],
    ),
    (
        "mobile",
        &[
            "mobile",
            "android",
            "ios",
            "kotlin",
            "swift",
            "react native",
            "flutter",
            "xamarin",
        ],
    ),
    (
        "database",
        &["sql", "mysql", "postgresql", "mongodb", "redis", "sqlite", "nosql"],
    ),
    (
        "devops",
        &[
            "devops",
            "ci/cd",
            "jenkins",
            "docker",
            "kubernetes",
            "ansible",
            "terraform",
        ],
    ),
    ("cloud", &["aws", "azure", "gcp", "google cloud"]),
    (
        "testing",
        &[
            "testing",
            "qa",
            "selenium",
            "junit",
            "pytest",
            "quality assurance",
        ],
    ),
    (
        "cybersecurity",
        &[
            "cybersecurity",
            "penetration testing",
            "infosec",
            "siem",
            "firewall",
        ],
    ),
    // Data & AI
    (
        "data analysis",
        &[
            "data analysis",
            "pandas",
            "numpy",
            "matplotlib",
            "tableau",
            "power bi",
        ],
    ),
    (
        "machine learning",
        &[
            "machine learning",
            "tensorflow",
            "pytorch",
            "scikit-learn",
            "keras",
            "nlp",
        ],
    ),
    (
        "data engineering",
        &["data engineering", "hadoop", "spark", "kafka", "etl"],
    ),
    // Embedded & systems
    (
        "os fundamentals",
        &["operating systems", "os fundamentals", "linux", "unix"],
    ),
    (
        "kernel programming",
        &["kernel programming", "system programming"],
    ),
    (
        "device drivers",
        &["device drivers", "bsp", "board support package"],
    ),
    (
        "embedded debugging",
        &["embedded debugging", "debugging tools", "jtag", "gdb"],
    ),
    (
        "system-level troubleshooting",
        &["system-level troubleshooting", "troubleshooting"],
    ),
    (
        "performance optimization",
        &["performance optimization", "low-level programming"],
    ),
    // Engineering degrees and related skills
    ("cad", &["cad", "autocad", "solidworks", "catia", "revit"]),
    ("matlab", &["matlab", "simulink"]),
    (
        "mechanical engineering",
        &[
            "mechanical engineering",
            "thermodynamics",
            "fluid mechanics",
            "fea",
            "ansys",
        ],
    ),
    (
        "electrical engineering",
        &[
            "electrical engineering",
            "electronics eng",
            "circuit design",
            "pcb",
            "vlsi",
            "verilog",
            "vhdl",
            "plc",
        ],
    ),
    (
        "civil engineering",
        &[
            "civil engineering",
            "structural analysis",
            "staad pro",
            "etabs",
        ],
    ),
    (
        "chemical engineering",
        &[
            "chemical engineering",
            "process simulation",
            "aspen hysys",
        ],
    ),
    (
        "information technology",
        &["information technology", "it", "information tech"],
    ),
    (
        "computer science",
        &["computer science", "cs", "software engineering"],
    ),
    (
        "mathematical sciences",
        &["mathematical sciences", "mathematics"],
    ),
    // Foundational & business
    ("data structures", &["data structures", "algorithms"]),
    ("system design", &["system design"]),
    (
        "project management",
        &["project management", "agile", "scrum", "jira"],
    ),
    (
        "finance",
        &["finance", "financial modeling", "valuation", "excel", "vba"],
    ),
    (
        "marketing",
        &[
            "marketing",
            "seo",
            "sem",
            "google analytics",
            "social media marketing",
        ],
    ),
    ("sales", &["sales", "crm", "salesforce"]),
    (
        "ui/ux",
        &[
            "ui/ux",
            "figma",
            "sketch",
            "adobe xd",
            "user interface",
            "user experience",
        ],
    ),
    (
        "graphic design",
        &["graphic design", "photoshop", "illustrator", "indesign"],
    ),
    ("documentation", &["documentation", "readme"]),
];
