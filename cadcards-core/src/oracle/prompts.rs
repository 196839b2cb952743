//! Prompt text for each generative function

use serde_json::json;

use super::types::TextRequest;
use crate::catalog::Category;
use crate::directory::{Department, Project};

/// Two-sentence steampunk boot log for a category tab
pub fn lore_request(category: Category) -> TextRequest {
    TextRequest::new(format!(
        "Write a short, cryptic, steampunk-style system initialization log (max 2 sentences) \
         for a CAD library module named \"{}\". Use words like \"cogitation\", \"pressure\", \
         \"steam\", \"flux\".",
        category.theme().label
    ))
}

/// Structured decoding of a land-surveying field code
pub fn decode_request(code: &str) -> TextRequest {
    TextRequest::new(format!(
        "Decode this Land Surveying Field Code: \"{code}\".\n\n\
         Translate standard abbreviations (e.g., \"TC\" = Top of Curb, \"IP\" = Iron Pipe, \
         \"FND\" = Found).\n\
         Return JSON with:\n\
         - description: The full human-readable meaning.\n\
         - category: Broad classification (e.g., Monumentation, Topography, Utilities, Vegetation).\n\
         - confidence: A number 1-100 indicating how standard this code is."
    ))
    .with_schema(json!({
        "type": "OBJECT",
        "properties": {
            "description": { "type": "STRING" },
            "category": { "type": "STRING" },
            "confidence": { "type": "NUMBER" }
        },
        "required": ["description", "category", "confidence"]
    }))
}

/// One-paragraph scope narrative for a job
pub fn scope_request(project: &Project) -> TextRequest {
    let tags = if project.tags.is_empty() {
        "none".to_string()
    } else {
        project.tags.join(", ")
    };

    TextRequest::new(format!(
        "Write a concise scope of work (3-4 sentences) for civil engineering and land surveying \
         job {} \"{}\" for client {} in {}. Current phase: {}. Tags: {}. \
         Plain professional prose, no headings or bullet points.",
        project.id, project.name, project.client, project.location, project.phase, tags
    ))
    .with_system(
        "You are a senior project manager at ACME, an engineering and surveying firm. \
         You write scope narratives for proposals and job folders.",
    )
}

/// Color and prop direction for an avatar, by department
pub fn department_theme(department: Option<Department>) -> &'static str {
    match department {
        Some(Department::Engineering) => {
            "Color Theme: Cobalt Blue & Clean White. Prop: Blueprints, Hard Hat, or Tablet. Vibe: Precise, Tech-savvy."
        }
        Some(Department::Surveying) => {
            "Color Theme: Safety Orange & Mud Brown. Prop: Vest, Prism Pole, or GPS. Vibe: Rugged, Outdoorsy."
        }
        Some(Department::Admin) => {
            "Color Theme: Gold & Cream. Prop: Headset, Clipboard, or Coffee. Vibe: Organized, Sharp."
        }
        Some(Department::Gis) => {
            "Color Theme: Electric Purple & Cyber Green. Prop: AR Glasses, Floating Data. Vibe: Futurist."
        }
        Some(Department::Management) => {
            "Color Theme: Silver & Slate Grey. Prop: Suit, Tie, Expensive Watch. Vibe: Commanding."
        }
        None => "Professional office wear",
    }
}

/// Stylized 3D avatar prompt for the image model
pub fn avatar_prompt(description: &str, department: Option<Department>) -> String {
    let department_name = department.map(|d| d.as_str()).unwrap_or("General");
    format!(
        "Create a 3D Avatar Icon of a company employee.\n\n\
         STYLE GUIDELINES:\n\
         - Art Style: \"Stylized 3D Character Design\" (References: Overwatch, Valorant, Pixar).\n\
         - Render: High-fidelity, ambient occlusion, soft studio lighting.\n\
         - Texture: Smooth vinyl/clay aesthetic.\n\
         - Background: SOLID COLOR or SIMPLE GRADIENT based on department color. NO complex scenes.\n\
         - Framing: Center-framed bust/portrait looking at camera.\n\n\
         CHARACTER DETAILS:\n{description}\n\n\
         DEPARTMENT THEME ({department_name}):\n{}\n\n\
         Constraint: Ensure the character looks like a cohesive set of collectable RPG characters.",
        department_theme(department)
    )
}

/// Strip markdown code fences some models wrap JSON in
pub fn strip_code_fences(content: &str) -> &str {
    content
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}
