//! Sample records shown when the remote dataset cannot be acquired.

use once_cell::sync::Lazy;

use crate::models::{Owner, Record, Tag};

static FALLBACK_RECORDS: Lazy<Vec<Record>> = Lazy::new(|| {
    vec![
        sample(
            1,
            "Creative Writing Assistant",
            "You are a professional creative writing assistant who helps users write articles, stories and other content. Offer high-quality writing suggestions tailored to the user's needs.",
            "A creative writing assistant offering high-quality writing suggestions",
            &[(1, "writing"), (2, "creative"), (3, "assistant")],
            (128, 1024),
            "WritingMaster",
        ),
        sample(
            2,
            "Code Review Expert",
            "You are an experienced code reviewer who spots problems in code, suggests optimizations and keeps quality high. Review the code the user provides carefully and give professional advice.",
            "Professional code review and optimization advice",
            &[(4, "programming"), (5, "code review"), (6, "optimization")],
            (256, 2048),
            "CodeReviewer",
        ),
        sample(
            3,
            "Study Planner",
            "You are a study planner who builds personalised study plans and strategies from the user's goals, schedule and circumstances.",
            "Personalised study plans and strategies",
            &[(7, "learning"), (8, "planning"), (9, "education")],
            (192, 1536),
            "LearnGuru",
        ),
        sample(
            4,
            "Data Analyst",
            "You are a data analyst who processes and analyses data of all kinds and produces insightful reports and charts.",
            "Data analysis and visualization",
            &[(10, "data analysis"), (11, "visualization"), (12, "reporting")],
            (184, 1280),
            "DataAnalyst",
        ),
        sample(
            5,
            "UI/UX Design Consultant",
            "You are an experienced UI/UX design consultant who gives advice on user experience, interface design and usability testing.",
            "UI/UX design consulting",
            &[(13, "design"), (14, "UI/UX"), (15, "user experience")],
            (320, 2560),
            "DesignGuru",
        ),
        sample(
            6,
            "Marketing Strategist",
            "You are a marketing strategist who designs effective campaigns, analyses market trends and advises on brand promotion.",
            "Marketing strategy and brand promotion",
            &[(16, "marketing"), (17, "strategy"), (18, "branding")],
            (276, 1920),
            "MarketingPro",
        ),
    ]
});

fn sample(
    id: i64,
    title: &str,
    content: &str,
    description: &str,
    tags: &[(i64, &str)],
    (likes, views): (u64, u64),
    username: &str,
) -> Record {
    Record {
        id,
        title: title.to_string(),
        content: content.to_string(),
        description: Some(description.to_string()),
        tags: Some(tags.iter().map(|&(id, name)| Tag::new(id, name)).collect()),
        is_r18: Some(false),
        likes: Some(likes),
        views: Some(views),
        owner: Some(Owner {
            username: username.to_string(),
            avatar_url: Some(format!("https://avatars.githubusercontent.com/u/{}?v=4", id)),
        }),
    }
}

/// The fixed sample dataset. Always the same records in the same order.
pub fn fallback_dataset() -> Vec<Record> {
    FALLBACK_RECORDS.clone()
}
