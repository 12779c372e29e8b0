//! Built-in preparation guidance. Only learnable skills are listed; degree programmes are not.

use super::{ResourceLink, SkillResource};

struct Row {
    skill: &'static str,
    preparation: &'static str,
    projects: &'static [&'static str],
    links: &'static [(&'static str, &'static str)],
}

const ROWS: &[Row] = &[
    Row {
        skill: "c/c++",
        preparation: "C/C++ is essential for low-level systems and performance-critical applications. Focus on memory management (pointers, malloc/free, new/delete), object-oriented principles in C++, and the Standard Template Library (STL).",
        projects: &[
            "Implement a custom memory allocator.",
            "Write a simple shell or command-line interpreter.",
            "Build a multi-threaded application to understand concurrency.",
        ],
        links: &[
            ("LearnCpp.com", "https://www.learncpp.com/"),
            ("GeeksforGeeks C++ Tutorial", "https://www.geeksforgeeks.org/c-plus-plus/"),
        ],
    },
    Row {
        skill: "kernel programming",
        preparation: "This is an advanced topic. Start by understanding the difference between user space and kernel space. Learn about system calls, kernel modules, and process scheduling. The Linux kernel is the most common place to start.",
        projects: &[
            "Write a simple 'Hello World' Linux kernel module.",
            "Create a basic character device driver.",
            "Modify a simple scheduler to implement a different scheduling policy.",
        ],
        links: &[
            ("The Linux Kernel Documentation", "https://www.kernel.org/doc/html/latest/"),
            ("Linux Device Drivers, 3rd Edition (Online Book)", "https://lwn.net/Kernel/LDD3/"),
        ],
    },
    Row {
        skill: "device drivers",
        preparation: "Device drivers are the software that allows the OS to communicate with hardware. Understanding this requires knowledge of both your OS (like Linux) and the hardware you're targeting. Start with simple virtual devices before moving to real hardware.",
        projects: &[
            "Write a basic keyboard driver for a virtual machine.",
            "Create a simple driver for a USB device.",
            "Work with Board Support Packages (BSPs) for a development board like a Raspberry Pi.",
        ],
        links: &[
            ("Linux Device Drivers, 3rd Edition (Online Book)", "https://lwn.net/Kernel/LDD3/"),
            ("Writing a Simple Linux Kernel Module (Tutorial)", "https://www.tldp.org/LDP/lkmpg/2.6/html/"),
        ],
    },
    Row {
        skill: "go",
        preparation: "Go (Golang) is known for simplicity and high performance, especially in backend systems. Start with the official 'A Tour of Go' to understand its syntax and powerful concurrency model (goroutines).",
        projects: &[
            "A simple REST API for a to-do list.",
            "A concurrent web scraper.",
            "A command-line tool that interacts with a third-party API.",
        ],
        links: &[
            ("Official Go Tour", "https://go.dev/tour/"),
            ("Go by Example", "https://gobyexample.com/"),
        ],
    },
    Row {
        skill: "testing",
        preparation: "Testing ensures your code works as expected. Learn the three main types: Unit tests (testing one small function), Integration tests (testing how parts work together), and End-to-end tests. Pick a framework like PyTest (Python) or JUnit (Java).",
        projects: &[
            "Go back to an old project and write unit tests for its core functions.",
            "Add integration tests for a project that calls an external API.",
        ],
        links: &[
            ("FreeCodeCamp - Software Testing Tutorial", "https://www.freecodecamp.org/news/software-testing-tutorial-beginners-guide/"),
            ("Atlassian - Types of Software Testing", "https://www.atlassian.com/continuous-delivery/software-testing/types-of-software-testing"),
        ],
    },
    Row {
        skill: "data structures",
        preparation: "This is a fundamental topic for any software role. You MUST understand Arrays, Linked Lists, Stacks, Queues, Trees, Graphs, and Hash Tables. Focus not just on what they are, but WHEN to use each one (time and space complexity).",
        projects: &[
            "Implement each major data structure from scratch in a language you know.",
            "Solve problems on LeetCode or HackerRank, specifically focusing on categories like 'Arrays' or 'Trees'.",
        ],
        links: &[
            ("LeetCode", "https://leetcode.com/"),
            ("GeeksforGeeks - Data Structures", "https://www.geeksforgeeks.org/data-structures/"),
            ("VisuAlgo (Visualizing data structures)", "https://visualgo.net/en"),
        ],
    },
    Row {
        skill: "python",
        preparation: "Master core data types, control flow, functions, and object-oriented programming. For internships, strong knowledge of libraries like Pandas and NumPy is a huge advantage.",
        projects: &[
            "A data analysis project using Pandas on a Kaggle dataset.",
            "A web scraper using BeautifulSoup or Scrapy.",
            "A simple web app using Flask or Django.",
        ],
        links: &[
            ("Official Python Tutorial", "https://docs.python.org/3/tutorial/"),
            ("Kaggle (for datasets)", "https://www.kaggle.com/datasets"),
        ],
    },
    Row {
        skill: "java",
        preparation: "Focus on core Java concepts (OOP, Collections Framework, Exception Handling, Multithreading). For backend roles, learning a framework like Spring Boot is essential.",
        projects: &[
            "A command-line banking application.",
            "A simple library management system.",
            "A REST API using Spring Boot.",
        ],
        links: &[
            ("Baeldung - Spring Boot", "https://www.baeldung.com/spring-boot"),
            ("GeeksforGeeks Java Tutorial", "https://www.geeksforgeeks.org/java/"),
        ],
    },
    Row {
        skill: "backend",
        preparation: "Backend engineering is about what happens on the server. Focus on APIs (especially REST), databases (SQL vs NoSQL), and authentication. Understand the request/response lifecycle.",
        projects: &[
            "Build a complete user login system (registration, login, logout) using a framework like Spring Boot or Django.",
            "Create an e-commerce backend with APIs for products and orders.",
        ],
        links: &[
            ("Roadmap.sh - Backend Developer", "https://roadmap.sh/backend"),
            ("FreeCodeCamp - APIs for Beginners", "https://www.freecodecamp.org/news/what-is-an-api-in-english-please/"),
        ],
    },
    Row {
        skill: "cad",
        preparation: "For Mechanical/Civil/Aero roles, CAD proficiency is non-negotiable. Master 2D sketching, 3D part modeling, assembly design, and generating engineering drawings. Pick one software (like AutoCAD or SolidWorks) and become an expert.",
        projects: &[
            "Design a complex mechanical assembly, like a gearbox or a bicycle frame.",
            "Create a full set of manufacturing drawings for a simple part.",
            "Model and render a consumer product.",
        ],
        links: &[
            ("SolidWorks Tutorials (Official)", "https://www.solidworks.com/support/solidworks-tutorials"),
            ("AutoCAD LinkedIn Learning", "https://www.linkedin.com/learning/topics/autocad"),
        ],
    },
];

pub(super) fn builtin_resources() -> impl Iterator<Item = (String, SkillResource)> {
    ROWS.iter().map(|row| {
        let resource = SkillResource {
            preparation: row.preparation.to_string(),
            projects: row.projects.iter().map(|p| p.to_string()).collect(),
            resources: row
                .links
                .iter()
                .map(|(title, url)| ResourceLink {
                    title: title.to_string(),
                    url: url.to_string(),
                })
                .collect(),
        };
        (row.skill.to_string(), resource)
    })
}
