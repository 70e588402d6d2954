use super::settings::MidjourneyParams;

/// Always excluded from Midjourney output: stock content must not show
/// people, animals, plants or text marks.
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "people", "person", "human", "face", "hands", "animals", "pets", "plants",
    "flowers", "trees", "text", "letters", "words", "logo", "brand", "watermark",
    "signature",
];

const DEFAULT_ASPECT_RATIO: &str = "1:1";
const DEFAULT_VERSION: &str = "6.1";
const DEFAULT_STYLIZE: u16 = 100;
const DEFAULT_QUALITY: &str = "1";

/// The fixed negative set followed by the user's comma separated exclusions,
/// trimmed, without empties or repeats.
pub fn exclusion_list(custom: &str) -> Vec<String> {
    let mut list: Vec<String> = NEGATIVE_KEYWORDS.iter().map(|s| s.to_string()).collect();
    for entry in custom.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !list.iter().any(|existing| existing.eq_ignore_ascii_case(entry)) {
            list.push(entry.to_string());
        }
    }
    list
}

/// CLI style flags for every parameter that differs from Midjourney's
/// defaults, always ending with `--no`.
pub fn midjourney_flags(params: &MidjourneyParams) -> String {
    let mut flags = Vec::new();
    if params.aspect_ratio != DEFAULT_ASPECT_RATIO {
        flags.push(format!("--ar {}", params.aspect_ratio));
    }
    if params.version != DEFAULT_VERSION {
        flags.push(format!("--v {}", params.version));
    }
    if params.chaos > 0 {
        flags.push(format!("--chaos {}", params.chaos));
    }
    if params.stylize != DEFAULT_STYLIZE {
        flags.push(format!("--stylize {}", params.stylize));
    }
    if params.quality != DEFAULT_QUALITY {
        flags.push(format!("--q {}", params.quality));
    }
    if params.weird > 0 {
        flags.push(format!("--weird {}", params.weird));
    }
    if params.raw {
        flags.push("--style raw".to_string());
    }
    if params.tile {
        flags.push("--tile".to_string());
    }
    if params.niji {
        flags.push("--niji".to_string());
    }
    flags.push(format!("--no {}", exclusion_list(&params.exclusions).join(", ")));
    flags.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_only_emit_no_flag() {
        let flags = midjourney_flags(&MidjourneyParams::default());
        assert!(flags.starts_with("--no people, person"));
        assert!(!flags.contains("--ar"));
        assert!(!flags.contains("--v "));
        assert!(!flags.contains("--stylize"));
    }

    #[test]
    fn non_defaults_emit_flags_in_order() {
        let params = MidjourneyParams {
            aspect_ratio: "16:9".to_string(),
            version: "6".to_string(),
            chaos: 20,
            stylize: 250,
            weird: 100,
            quality: "2".to_string(),
            raw: true,
            tile: true,
            niji: true,
            exclusions: String::new(),
        };
        let flags = midjourney_flags(&params);
        assert!(flags.starts_with(
            "--ar 16:9 --v 6 --chaos 20 --stylize 250 --q 2 --weird 100 --style raw --tile --niji --no "
        ));
    }

    #[test]
    fn custom_exclusions_are_merged() {
        let list = exclusion_list(" cars, ,Logo, blur ,cars");
        assert_eq!(list.len(), NEGATIVE_KEYWORDS.len() + 2);
        assert_eq!(&list[list.len() - 2..], &["cars".to_string(), "blur".to_string()]);
    }
}
