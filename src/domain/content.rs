//! Static page content: alumni, team, resources, merchandise and the home page.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::entities::{
    course::CourseLevel,
    showcase::{
        AlumniMember, MerchProduct, Resource, ResourceCategory, ResourceType, SizeDetail, TeamMember,
    },
};

pub const TERMINAL_LINES: [&str; 6] = [
    "> Initializing future_tech.py",
    "> Loading quantum algorithms",
    "> Connecting to server..",
    "> System ready! Welcome to Coding Club",
    "> >>> import innovation",
    "> >>> innovation.transform_future",
];

pub const HOME_STATS: [(&str, &str); 3] = [
    ("40+", "Active Members"),
    ("3+", "Projects & Courses"),
    ("5+", "Workshops Held"),
];

pub const HOME_TECH_TAGS: [&str; 3] = ["Machine Learning", "Web Development", "AI Research"];

/// Index the alumni carousel opens on.
pub const ALUMNI_START_INDEX: usize = 2;

fn s(value: &str) -> String {
    value.to_string()
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub static ALUMNI: Lazy<Vec<AlumniMember>> = Lazy::new(|| vec![
    AlumniMember {
        id: s("1"),
        name: s("Asutosh Kumar"),
        role: s("Senior Software Engineer"),
        company: s("Google"),
        batch: s("CS 2016-2020"),
        passout_year: s("2020"),
        image: s("/images/alumni/alumni_ashutosh.jpg"),
        linkedin: Some(s("https://linkedin.com/in/aditisharma")),
        email: Some(s("aditi.sharma@gmail.com")),
        description: s("Leading mobile development initiatives at Google, specializing in Android architecture and performance optimization."),
    },
    AlumniMember {
        id: s("2"),
        name: s("Krishna Kumar Singh"),
        role: s("Data Scientist"),
        company: s("Microsoft"),
        batch: s("Physics 2015-2019"),
        passout_year: s("2019"),
        image: s("/images/alumni/alumni_krishna.jpg"),
        linkedin: Some(s("https://linkedin.com/in/rajeshkumar")),
        email: Some(s("rajesh.kumar@microsoft.com")),
        description: s("Building ML models for Azure cognitive services, focusing on natural language processing and computer vision."),
    },
    AlumniMember {
        id: s("3"),
        name: s("Ashwin Nair"),
        role: s("Product Manager"),
        company: s("Meta"),
        batch: s("Mathematics 2014-2018"),
        passout_year: s("2018"),
        image: s("/images/alumni/ashwin.jpeg"),
        linkedin: Some(s("https://linkedin.com/in/priyanair")),
        email: Some(s("priya.nair@meta.com")),
        description: s("Managing WhatsApp Business API products, driving strategy for emerging markets and small business growth."),
    },
]);

pub static TEAM: Lazy<Vec<TeamMember>> = Lazy::new(|| vec![
    TeamMember {
        id: s("1"),
        name: s("Shreyansh"),
        role: s("Club President"),
        description: s("Full-stack developer with expertise in React, Node.js, and cloud technologies. Currently working on AI-powered educational tools."),
        image: s("/images/team/hero-tech.png"),
        github: Some(s("https://github.com/arjunk")),
        linkedin: Some(s("https://linkedin.com/in/arjunkrishnan")),
        email: Some(s("arjun@iisertvm.ac.in")),
        year: s("Final Year"),
        department: s("Computer Science"),
    },
    TeamMember {
        id: s("2"),
        name: s("Sarurabh Misra"),
        role: s("Technical Lead"),
        description: s("Machine learning enthusiast and open-source contributor. Specializes in Python, TensorFlow, and data science."),
        image: s("/images/team/saurabh.jpg"),
        github: Some(s("https://github.com/saurab")),
        linkedin: Some(s("https://linkedin.com/in/priyasharma")),
        email: Some(s("saurabh23@iisertvm.ac.in")),
        year: s("Third Year"),
        department: s("i^2 Mathematics"),
    },
    TeamMember {
        id: s("3"),
        name: s("Antrin"),
        role: s("Design and Technical Lead"),
        description: s("AI and physics enthusiast with a keen eye for design and photography. Currently creating the new club website."),
        image: s("/images/team/antrin.jpg"),
        github: Some(s("https://github.com/Antrin018")),
        linkedin: Some(s("https://linkedin.com/in/antrin-maji-559723343")),
        email: Some(s("antrin24@iisertvm.ac.in")),
        year: s("Second Year"),
        department: s("Physics"),
    },
    TeamMember {
        id: s("4"),
        name: s("Ayush Siddha"),
        role: s("Technical Lead"),
        description: s("ML, AI and Automation enthusiast."),
        image: s("/images/team/siddha.png"),
        github: Some(s("https://github.com/AyushTheKingSiddha")),
        linkedin: Some(s("https://www.linkedin.com/in/ayush-siddha-614a14332/")),
        email: Some(s("parimal24@iisertvm.ac.in")),
        year: s("Second Year"),
        department: s("Data Science"),
    },
]);

#[allow(clippy::too_many_arguments)]
fn resource(
    id: &str,
    title: &str,
    description: &str,
    category: ResourceCategory,
    resource_type: ResourceType,
    url: &str,
    image: &str,
    author: &str,
    date: &str,
    rating: f32,
    views: u32,
    resource_tags: &[&str],
    difficulty: CourseLevel,
    is_featured: bool,
) -> Resource {
    Resource {
        id: s(id),
        title: s(title),
        description: s(description),
        category,
        resource_type,
        url: s(url),
        image: s(image),
        author: s(author),
        date: s(date),
        rating,
        views,
        tags: tags(resource_tags),
        difficulty,
        is_featured,
    }
}

pub static RESOURCES: Lazy<Vec<Resource>> = Lazy::new(|| vec![
    resource("1", "React Complete Developer Guide",
        "Comprehensive guide covering React fundamentals, hooks, state management, and advanced patterns with practical examples.",
        ResourceCategory::Documentation, ResourceType::Website, "https://react-guide.iisertvm.ac.in",
        "/images/resources/react-guide.jpg", "Rahul Nair", "Dec 2024", 4.9, 1250,
        &["React", "JavaScript", "Frontend", "Hooks"], CourseLevel::Intermediate, true),
    resource("2", "Python Data Science Toolkit",
        "Essential Python libraries and tools for data science including NumPy, Pandas, and Matplotlib with Jupyter notebooks.",
        ResourceCategory::Tool, ResourceType::Github, "https://github.com/iisertvm/python-ds-toolkit",
        "/images/resources/hero-tech.png", "Dr. Meera Joshi", "Nov 2024", 4.8, 2100,
        &["Python", "Data Science", "Pandas", "NumPy"], CourseLevel::Beginner, true),
    resource("3", "Modern CSS Grid Layouts",
        "Interactive tutorial series on CSS Grid with live examples and practical layouts for modern web design.",
        ResourceCategory::Tutorial, ResourceType::Video, "https://youtube.com/watch?v=css-grid-tutorial",
        "/images/resources/css-grid.jpg", "Sneha Patel", "Oct 2024", 4.7, 850,
        &["CSS", "Web Design", "Layout", "Grid"], CourseLevel::Intermediate, false),
    resource("4", "Machine Learning Cheat Sheet",
        "Quick reference guide for ML algorithms, formulas, and implementation tips. Perfect for interviews and quick revision.",
        ResourceCategory::Article, ResourceType::Pdf, "/downloads/ml-cheatsheet.pdf",
        "/images/resources/ml-cheatsheet.jpg", "Priya Sharma", "Dec 2024", 4.9, 3200,
        &["Machine Learning", "Algorithms", "Reference"], CourseLevel::Advanced, false),
    resource("5", "Node.js Backend Template",
        "Production-ready Node.js backend template with authentication, database integration, and API documentation.",
        ResourceCategory::Template, ResourceType::Github, "https://github.com/iisertvm/nodejs-backend-template",
        "/images/resources/nodejs-template.jpg", "Arjun Kumar", "Nov 2024", 4.6, 1450,
        &["Node.js", "Backend", "API", "Template"], CourseLevel::Intermediate, false),
    resource("6", "Git Workflow Masterclass",
        "Complete course on Git version control, branching strategies, collaboration workflows, and best practices.",
        ResourceCategory::Course, ResourceType::Video, "https://courses.iisertvm.ac.in/git-masterclass",
        "/images/resources/git-course.jpg", "Vikram Singh", "Sep 2024", 4.8, 1800,
        &["Git", "Version Control", "Collaboration"], CourseLevel::Beginner, false),
    resource("7", "Mobile App UI Kit",
        "Comprehensive Figma UI kit for mobile app design with components, icons, and design system guidelines.",
        ResourceCategory::Template, ResourceType::Download, "/downloads/mobile-ui-kit.fig",
        "/images/resources/ui-kit.jpg", "Anjali Singh", "Oct 2024", 4.7, 950,
        &["UI/UX", "Mobile", "Figma", "Design"], CourseLevel::Beginner, false),
    resource("8", "Database Design Patterns",
        "In-depth article covering database design patterns, normalization, indexing strategies, and performance optimization.",
        ResourceCategory::Article, ResourceType::Website, "https://blog.iisertvm.ac.in/database-patterns",
        "/images/resources/database-patterns.jpg", "Karthik Menon", "Dec 2024", 4.8, 1100,
        &["Database", "SQL", "Design Patterns"], CourseLevel::Advanced, false),
]);

fn size_row(size: &str, measurements: &[(&str, &str)]) -> SizeDetail {
    SizeDetail {
        size: s(size),
        measurements: measurements
            .iter()
            .map(|(k, v)| (s(k), s(v)))
            .collect::<BTreeMap<_, _>>(),
    }
}

pub static MERCH: Lazy<Vec<MerchProduct>> = Lazy::new(|| vec![
    MerchProduct {
        id: s("hoodie"),
        name: s("CCIT Hoodie"),
        price: s("₹599"),
        material: s("100% Cotton"),
        front_image: s("/back.png"),
        back_image: s("/merch/hoodie-back.jpg"),
        description: s("Premium Quality • Limited Edition"),
        product_type: s("Apparel"),
        sizes: tags(&["XS", "S", "M", "L", "XL", "XXL"]),
        size_details: vec![
            size_row("XS", &[("Chest", "86 cm"), ("Length", "63 cm"), ("Shoulder", "41 cm")]),
            size_row("S", &[("Chest", "91 cm"), ("Length", "66 cm"), ("Shoulder", "44 cm")]),
            size_row("M", &[("Chest", "96 cm"), ("Length", "69 cm"), ("Shoulder", "47 cm")]),
            size_row("L", &[("Chest", "101 cm"), ("Length", "72 cm"), ("Shoulder", "50 cm")]),
            size_row("XL", &[("Chest", "106 cm"), ("Length", "75 cm"), ("Shoulder", "53 cm")]),
            size_row("XXL", &[("Chest", "111 cm"), ("Length", "78 cm"), ("Shoulder", "56 cm")]),
        ],
    },
    MerchProduct {
        id: s("tshirt"),
        name: s("CCIT T-Shirt"),
        price: s("₹399"),
        material: s("Cotton Blend"),
        front_image: s("/merch/tshirt.jpg"),
        back_image: s("/merch/tshirt-back.jpg"),
        description: s("Comfortable • Everyday Wear"),
        product_type: s("Apparel"),
        sizes: tags(&["XS", "S", "M", "L", "XL", "XXL"]),
        size_details: vec![
            size_row("XS", &[("Chest", "84 cm"), ("Length", "61 cm"), ("Shoulder", "39 cm")]),
            size_row("S", &[("Chest", "89 cm"), ("Length", "64 cm"), ("Shoulder", "42 cm")]),
            size_row("M", &[("Chest", "94 cm"), ("Length", "67 cm"), ("Shoulder", "45 cm")]),
            size_row("L", &[("Chest", "99 cm"), ("Length", "70 cm"), ("Shoulder", "48 cm")]),
            size_row("XL", &[("Chest", "104 cm"), ("Length", "73 cm"), ("Shoulder", "51 cm")]),
            size_row("XXL", &[("Chest", "109 cm"), ("Length", "76 cm"), ("Shoulder", "54 cm")]),
        ],
    },
    MerchProduct {
        id: s("mug"),
        name: s("Coffee Mug"),
        price: s("₹299"),
        material: s("Ceramic"),
        front_image: s("/merch/mug.jpg"),
        back_image: s("/merch/mug-side.jpg"),
        description: s("Perfect for Code & Coffee"),
        product_type: s("Accessories"),
        sizes: tags(&["11oz", "15oz"]),
        size_details: vec![
            size_row("11oz", &[("Height", "9.5 cm"), ("Diameter", "8 cm")]),
            size_row("15oz", &[("Height", "12 cm"), ("Diameter", "8.5 cm")]),
        ],
    },
    MerchProduct {
        id: s("stickers"),
        name: s("Sticker Pack"),
        price: s("₹99"),
        material: s("Set of 10"),
        front_image: s("/merch/stickers.jpg"),
        back_image: s("/merch/stickers-layout.jpg"),
        description: s("Waterproof • Tech Themed"),
        product_type: s("Accessories"),
        sizes: tags(&["Standard"]),
        size_details: vec![
            size_row("Standard", &[("Size", "5-8 cm each")]),
        ],
    },
]);
