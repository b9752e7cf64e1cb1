//! Static page copy and link tables.

pub const OWNER: &str = "Abhinav Sai Konjeti";
pub const PRELOADER_SUBTITLE: &str = "Portfolio";
/// Header logo text.
pub const BRAND: &str = "Welcome";

/// Relative to the site base so it resolves under any public URL.
pub const RESUME_PATH: &str = "resume.pdf";
pub const PORTRAIT_PATH: &str = "lovable-uploads/9b8ac01e-553f-427f-a331-46ba1dd66239.png";
pub const SPLINE_SCENE_URL: &str = "https://my.spline.design/chips-1AAX1ychyxClnZO1VSbMkxJP/";

pub const ROLES: [&str; 5] = [
    "Gen AI Engineer",
    "LLM Engineer",
    "Machine Learning Engineer",
    "Agentic AI Engineer",
    "LLMOps/MLOps Expert",
];

pub const HERO_SUBTITLE: &str = "Architecting advanced LLMs, RAG pipelines, and enterprise grade agentic AI frameworks to deliver tangible impact at scale.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { name: "Home", href: "#home" },
    NavItem { name: "About", href: "#about" },
    NavItem { name: "Projects", href: "#projects" },
    NavItem { name: "Contact", href: "#contact" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Secondary,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "text-primary",
            Self::Secondary => "text-accent",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub glyph: &'static str,
    pub accent: Accent,
}

pub const SKILLS: [Skill; 6] = [
    Skill {
        name: "Generative AI",
        glyph: "✦",
        accent: Accent::Primary,
    },
    Skill {
        name: "Agentic AI",
        glyph: "⚙",
        accent: Accent::Secondary,
    },
    Skill {
        name: "LLM Fine-Tuning",
        glyph: "</>",
        accent: Accent::Primary,
    },
    Skill {
        name: "Retrieval-Augmented Generation",
        glyph: "▤",
        accent: Accent::Secondary,
    },
    Skill {
        name: "MLOps & LLMOps",
        glyph: "ϟ",
        accent: Accent::Primary,
    },
    Skill {
        name: "Neural Networks",
        glyph: "◈",
        accent: Accent::Secondary,
    },
];

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "I am a Generative AI Engineer and Agentic AI Specialist with 7+ years of experience designing and deploying intelligent systems that transform data into actionable insights.",
    "My expertise spans Large Language Models (LLMs), Retrieval Augmented Generation (RAG), MLOps & LLMOps, and enterprise AI architectures. I build scalable AI solutions that drive innovation and solve complex, real-world challenges.",
    "I am passionate about leveraging advanced neural architectures, agentic AI frameworks, and AI orchestration to accelerate decision making and deliver tangible business impact.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub category: &'static str,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "LLM Document Summarization",
        description: "Advanced document processing system using large language models for intelligent summarization and analysis.",
        image: "lovable-uploads/4c4104c3-2c9f-47e9-9ff1-f4878af0f352.png",
        tech: &["Python", "Transformers", "LangChain", "openAI", "Pypdf", "FAISS"],
        category: "Generative AI",
    },
    Project {
        title: "RAG Knowledge Base",
        description: "Retrieval augmented generation system for enhanced document processing and cross encoder ranking.",
        image: "lovable-uploads/ee5e2a54-dc32-40aa-bbc0-6dafed87b052.png",
        tech: &["OpenAI", "Embedding Models", "Vector DB", "Python"],
        category: "RAG",
    },
    Project {
        title: "Linear Regression using Neural Nets",
        description: "This FMCG Dataset is fitted using neural nets and various optimizers to predict sales, Frontend : Real-time demand forecasting system with interactive dashboard for product sales analytics.",
        image: "lovable-uploads/2d72c106-6f3e-436b-849b-4f077e700d1e.png",
        tech: &[
            "PyTorch",
            "ANN",
            "Huber vs MSE loss",
            "dropouts",
            "Scikit learn",
            "Reduce on plateau",
            "Matplotlib",
        ],
        category: "Deep Learning",
    },
    Project {
        title: "Next word prediction",
        description: "This LSTM based model predicts the next word based on the previous sequence of words in a sentence. Trained on a large corpus of text data.",
        image: "lovable-uploads/project6.jpg",
        tech: &["streamlit", "Python", "LSTM", "GRU", "NLP", "Deep Learning", "PyTorch"],
        category: "Recurrent Neural Nets",
    },
    Project {
        title: "Multi-Variable Analysis",
        description: "Comprehensive correlation analysis platform for complex multi-dimensional dataset exploration.",
        image: "lovable-uploads/33a55f09-740b-40ac-a9da-8ba90109b0c6.png",
        tech: &["Pandas", "Seaborn", "Statistical Analysis", "Data Viz"],
        category: "Data Science",
    },
    Project {
        title: "Air Quality Classifier",
        description: "Environmental monitoring system using machine learning to classify air quality types and patterns using real world data and predict type of city.",
        image: "lovable-uploads/ea3db8d9-ad5b-4289-b6af-e96197a562e3.png",
        tech: &[
            "Classification",
            "Neural Nets",
            "BCE loss fn",
            "Environmental ML",
            "streamlit",
            "API",
        ],
        category: "classification using NNs",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
    pub hover_class: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 6] = [
    SocialLink {
        name: "Email",
        href: "mailto:abhi.konjeti@gmail.com",
        glyph: "✉",
        hover_class: "hover-email",
    },
    SocialLink {
        name: "GitHub",
        href: "https://github.com/Abhinav-sai-k",
        glyph: "⌥",
        hover_class: "hover-primary",
    },
    SocialLink {
        name: "LinkedIn",
        href: "https://www.linkedin.com/in/abhitheaidude/",
        glyph: "in",
        hover_class: "hover-linkedin",
    },
    SocialLink {
        name: "Kaggle",
        href: "https://www.kaggle.com/hallohallo69",
        glyph: "k",
        hover_class: "hover-kaggle",
    },
    SocialLink {
        name: "Twitter (X)",
        href: "https://x.com/",
        glyph: "𝕏",
        hover_class: "hover-twitter",
    },
    SocialLink {
        name: "Instagram",
        href: "https://www.instagram.com/",
        glyph: "◎",
        hover_class: "hover-instagram",
    },
];

/// Names of the social links repeated as icons in the footer.
pub const FOOTER_SOCIALS: [&str; 4] = ["GitHub", "LinkedIn", "Twitter (X)", "Instagram"];

pub fn footer_socials() -> impl Iterator<Item = &'static SocialLink> {
    FOOTER_SOCIALS
        .iter()
        .filter_map(|name| SOCIAL_LINKS.iter().find(|link| link.name == *name))
}

pub struct InfoItem {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const CONTACT_INFO: [InfoItem; 3] = [
    InfoItem {
        heading: "Response Time",
        body: "I typically respond within 24 hours on weekdays",
    },
    InfoItem {
        heading: "Collaboration",
        body: "Open to full-time, contract, and consulting opportunities",
    },
    InfoItem {
        heading: "Expertise",
        body: "Specializing in Generative AI, MLOps, and scalable AI systems",
    },
];

pub const FOOTER_TAGLINE: &str = "Generative AI Engineer & Agentic AI Specialist. Designing scalable LLM, RAG, and AI-driven solutions that power enterprise innovation.";
