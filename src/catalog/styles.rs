//! Styles, moods and the descriptive word lists used by the template engine.

#[derive(Debug)]
pub struct Style {
    pub key: &'static str,
    pub clause: &'static str,
    pub title_adjective: &'static str,
}

#[derive(Debug)]
pub struct Mood {
    pub key: &'static str,
    pub clause: &'static str,
    pub title_adjective: &'static str,
}

pub static STYLES: &[Style] = &[
    Style {
        key: "cinematic",
        clause: "cinematic look with film grain and anamorphic depth",
        title_adjective: "Cinematic",
    },
    Style {
        key: "minimalist",
        clause: "minimalist aesthetic with clean lines and negative space",
        title_adjective: "Minimalist",
    },
    Style {
        key: "vintage",
        clause: "vintage film aesthetic with faded tones",
        title_adjective: "Vintage",
    },
    Style {
        key: "modern",
        clause: "contemporary modern style with crisp detail",
        title_adjective: "Modern",
    },
    Style {
        key: "dramatic",
        clause: "dramatic style with strong contrast and deep shadows",
        title_adjective: "Dramatic",
    },
    Style {
        key: "bright",
        clause: "bright airy style with high key exposure",
        title_adjective: "Bright",
    },
];

pub static MOODS: &[Mood] = &[
    Mood {
        key: "calm",
        clause: "calm and serene atmosphere",
        title_adjective: "Peaceful",
    },
    Mood {
        key: "energetic",
        clause: "energetic and vibrant atmosphere",
        title_adjective: "Dynamic",
    },
    Mood {
        key: "mysterious",
        clause: "mysterious and moody atmosphere",
        title_adjective: "Mysterious",
    },
    Mood {
        key: "warm",
        clause: "warm and inviting atmosphere",
        title_adjective: "Cozy",
    },
    Mood {
        key: "professional",
        clause: "professional and trustworthy atmosphere",
        title_adjective: "Professional",
    },
    Mood {
        key: "joyful",
        clause: "joyful and optimistic atmosphere",
        title_adjective: "Cheerful",
    },
];

pub fn style(key: &str) -> Option<&'static Style> {
    STYLES.iter().find(|s| s.key == key)
}

pub fn mood(key: &str) -> Option<&'static Mood> {
    MOODS.iter().find(|m| m.key == key)
}

pub const DEFAULT_STYLE_CLAUSE: &str = "professional photographic style";
pub const DEFAULT_MOOD_CLAUSE: &str = "balanced natural atmosphere";

pub static LIGHTING: &[&str] = &[
    "golden hour lighting",
    "soft diffused daylight",
    "dramatic side lighting",
    "studio softbox lighting",
    "moody low key lighting",
    "bright natural window light",
    "neon accent lighting",
    "backlit rim lighting",
];

pub static COMPOSITION: &[&str] = &[
    "rule of thirds composition",
    "centered symmetrical composition",
    "leading lines composition",
    "close-up detail shot",
    "wide establishing shot",
    "flat lay top-down view",
    "low angle perspective",
];

pub static COLOR_PALETTE: &[&str] = &[
    "vibrant saturated colors",
    "muted pastel palette",
    "monochrome tones",
    "warm earthy tones",
    "cool blue tones",
    "complementary teal and orange palette",
];

pub static CAMERA: &[&str] = &[
    "shot on 35mm lens",
    "85mm portrait lens with shallow depth of field",
    "macro lens detail",
    "wide angle 24mm lens",
    "aerial drone perspective",
    "telephoto compression",
];

pub static QUALITY: &[&str] = &[
    "ultra detailed",
    "8k resolution",
    "sharp focus",
    "award winning photography",
    "highly detailed textures",
    "professional color grading",
];

pub static LIGHTING_KEYS: &[&str] = &["golden", "soft", "dramatic", "studio", "natural", "neon"];
pub static COMPOSITION_KEYS: &[&str] = &[
    "rule_of_thirds",
    "centered",
    "leading_lines",
    "close_up",
    "wide",
    "flat_lay",
];
pub static COLOR_KEYS: &[&str] = &["vibrant", "pastel", "monochrome", "warm", "cool"];
pub static CAMERA_KEYS: &[&str] = &["35mm", "portrait", "macro", "wide", "aerial", "telephoto"];

pub const DEFAULT_LIGHTING: &str = "natural lighting";
pub const DEFAULT_COMPOSITION: &str = "balanced composition";
pub const DEFAULT_COLOR: &str = "natural color palette";
pub const DEFAULT_CAMERA: &str = "professional camera setting";

pub fn lighting_for(key: &str) -> &'static str {
    match key {
        "golden" => "golden hour lighting",
        "soft" => "soft diffused daylight",
        "dramatic" => "dramatic side lighting",
        "studio" => "studio softbox lighting",
        "natural" => "bright natural window light",
        "neon" => "neon accent lighting",
        _ => DEFAULT_LIGHTING,
    }
}

pub fn composition_for(key: &str) -> &'static str {
    match key {
        "rule_of_thirds" => "rule of thirds composition",
        "centered" => "centered symmetrical composition",
        "leading_lines" => "leading lines composition",
        "close_up" => "close-up detail shot",
        "wide" => "wide establishing shot",
        "flat_lay" => "flat lay top-down view",
        _ => DEFAULT_COMPOSITION,
    }
}

pub fn color_for(key: &str) -> &'static str {
    match key {
        "vibrant" => "vibrant saturated colors",
        "pastel" => "muted pastel palette",
        "monochrome" => "monochrome tones",
        "warm" => "warm earthy tones",
        "cool" => "cool blue tones",
        _ => DEFAULT_COLOR,
    }
}

pub fn camera_for(key: &str) -> &'static str {
    match key {
        "35mm" => "shot on 35mm lens",
        "portrait" => "85mm portrait lens with shallow depth of field",
        "macro" => "macro lens detail",
        "wide" => "wide angle 24mm lens",
        "aerial" => "aerial drone perspective",
        "telephoto" => "telephoto compression",
        _ => DEFAULT_CAMERA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_tables_fall_back() {
        assert_eq!(lighting_for("golden"), "golden hour lighting");
        assert_eq!(lighting_for("laser"), DEFAULT_LIGHTING);
        assert_eq!(composition_for(""), DEFAULT_COMPOSITION);
        assert_eq!(color_for("sepia"), DEFAULT_COLOR);
        assert_eq!(camera_for("pinhole"), DEFAULT_CAMERA);
    }

    #[test]
    fn mapped_values_appear_in_random_lists() {
        for key in ["golden", "soft", "dramatic", "studio", "natural", "neon"] {
            assert!(LIGHTING.contains(&lighting_for(key)));
        }
        for key in ["35mm", "portrait", "macro", "wide", "aerial", "telephoto"] {
            assert!(CAMERA.contains(&camera_for(key)));
        }
    }

    #[test]
    fn title_adjectives() {
        assert_eq!(style("cinematic").map(|s| s.title_adjective), Some("Cinematic"));
        assert_eq!(mood("calm").map(|m| m.title_adjective), Some("Peaceful"));
    }
}
