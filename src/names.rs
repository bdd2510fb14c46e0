//! Display-name normalization for the raw upper-snake-case tokens found in the
//! source files.
//!
//! Every function here is total: any input maps to exactly one output.

use phf::phf_map;
use schema::TeachableCategory;

/// Moves whose display name can't be derived by title-casing the token.
static MOVE_NAME_OVERRIDES: phf::Map<&'static str, &'static str> = phf_map! {
    "PSYCHIC_M" => "Psychic",
    "X_SCISSOR" => "X-Scissor",
    "DOUBLE_EDGE" => "Double-Edge",
    "U_TURN" => "U-turn",
    "WILL_O_WISP" => "Will-O-Wisp",
    "MUD_SLAP" => "Mud-Slap",
};

/// Display name, egg move key and evolution/attack key for creatures whose
/// base stat file name doesn't follow the usual conventions. Regional plain
/// forms share egg moves with the form that owns the egg move entry.
static CREATURE_NAME_OVERRIDES: phf::Map<&'static str, (&'static str, &'static str, &'static str)> = phf_map! {
    "mime_jr_" => ("Mime Jr.", "MimeJr", "MimeJr"),
    "mr__mime_plain" => ("Mr. Mime", "MimeJr", "MrMimePlain"),
    "mr__mime_galarian" => ("Mr. Mime Galarian", "MimeJr", "MrMimeGalarian"),
    "mr__rime" => ("Mr. Rime", "MimeJr", "MrRime"),
    "diglett_plain" => ("Diglett", "DiglettAlolan", "DiglettPlain"),
    "rattata_plain" => ("Rattata", "RattataAlolan", "RattataPlain"),
    "raticate_plain" => ("Raticate", "RaticatePlain", "RaticateAlolan"),
    "meowth_plain" => ("Meowth", "MeowthGalarian", "MeowthPlain"),
    "meowth_alolan" => ("Meowth (Alolan)", "MeowthGalarian", "MeowthAlolan"),
    "growlithe_plain" => ("Growlithe", "GrowlitheHisuian", "GrowlithePlain"),
    "geodude_plain" => ("Geodude", "GeodudeAlolan", "GeodudePlain"),
    "slowpoke_plain" => ("Slowpoke", "SlowpokeGalarian", "SlowpokePlain"),
    "wooper_plain" => ("Wooper", "WooperPaldean", "WooperPlain"),
    "corsola_plain" => ("Corsola", "CorsolaGalarian", "CorsolaPlain"),
    "girafarig" => ("Girafarig", "Girafarig", "Farigiraf"),
    "qwilfish_plain" => ("Qwilfish", "Qwilfish", "QwilfishPlain"),
    "sneasel_plain" => ("Sneasel", "Sneasel", "SneaselPlain"),
    "farfetch_d_plain" => ("Farfetch'd", "FarfetchDPlain", "FarfetchDPlain"),
    "farfetch_d_galarian" => ("Farfetch'd (Galarian)", "FarfetchDGalarian", "FarfetchDGalarian"),
    "sirfetch_d" => ("Sirfetch'd", "FarfetchDGalarian", "SirfetchD"),
    "mewtwo_plain" => ("Mewtwo", "Mewtwo", "Mewtwo"),
    "mewtwo_armored" => ("Mewtwo (Armored)", "Mewtwo", "Mewtwo"),
    "ho_oh" => ("Ho-Oh", "HoOh", "HoOh"),
    "tauros_paldean" => ("Tauros (Combat Breed) (Paldean)", "", "TaurosPaldean"),
    "tauros_paldean_fire" => ("Tauros (Blaze Breed) (Paldean)", "", "TaurosPaldeanFire"),
    "tauros_paldean_water" => ("Tauros (Aqua Breed) (Paldean)", "", "TaurosPaldeanWater"),
};

static TIME_OF_DAY: phf::Map<&'static str, &'static str> = phf_map! {
    "TR_ANYTIME" => "Anytime",
    "TR_MORNDAY" => "Morning/Day",
    "TR_EVENITE" => "Evening/Night",
};

static STAT_COMPARISON: phf::Map<&'static str, &'static str> = phf_map! {
    "ATK_GT_DEF" => "Atk greater than Def",
    "ATK_LT_DEF" => "Atk less than Def",
    "ATK_EQ_DEF" => "Atk equals Def",
};

/// The names a creature is known by across the source files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureNames {
    pub display: String,
    pub egg_moves_key: String,
    pub evo_attacks_key: String,
}

/// Title-cases `text` the way the wiki always has: a letter following a
/// non-letter is upper-cased, every other letter is lower-cased.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }
    result
}

/// `SOME_TOKEN` -> `Some Token`.
pub fn humanize(token: &str) -> String {
    title_case(&token.trim().replace('_', " "))
}

pub fn format_move_name(token: &str) -> String {
    let token = token.trim();
    match MOVE_NAME_OVERRIDES.get(token) {
        Some(name) => name.to_string(),
        None => humanize(token),
    }
}

pub fn parse_move_category(token: &str) -> TeachableCategory {
    let token = token.trim();
    let upper = token.to_ascii_uppercase();
    if upper.starts_with("TM") {
        TeachableCategory::Tm(token[2..].to_string())
    } else if upper.starts_with("HM") {
        TeachableCategory::Hm(token[2..].to_string())
    } else if upper.contains("MT") {
        TeachableCategory::MoveTutor
    } else {
        TeachableCategory::Other(token.to_string())
    }
}

/// `TM01` -> `TM 01`, `MT03` -> `Move Tutor`.
pub fn format_move_category(token: &str) -> String {
    parse_move_category(token).to_string()
}

/// Resolves a base stat file stem (e.g. `raticate_plain`) into its display
/// name and the keys used to join the other tables.
pub fn creature_names(file_key: &str) -> CreatureNames {
    if let Some((display, egg, evo)) = CREATURE_NAME_OVERRIDES.get(file_key) {
        return CreatureNames {
            display: display.to_string(),
            egg_moves_key: egg.to_string(),
            evo_attacks_key: evo.to_string(),
        };
    }

    let key = title_case(file_key).replace('_', "");
    let display = if file_key.to_lowercase().contains("plain") {
        title_case(file_key.strip_suffix("_plain").unwrap_or(file_key))
    } else {
        let mut parts = file_key.split('_');
        match (parts.next(), parts.next()) {
            (Some(base), Some(form)) => format!("{} ({})", title_case(base), title_case(form)),
            _ => title_case(file_key),
        }
    };

    CreatureNames {
        display,
        egg_moves_key: key.clone(),
        evo_attacks_key: key,
    }
}

/// Joins a creature token and an optional `*_FORM` token into the
/// evolution/attack key convention: `RATTATA, ALOLAN_FORM` -> `RattataAlolan`.
pub fn family_key(creature: &str, form: Option<&str>) -> String {
    let mut key = title_case(creature.trim()).replace('_', "");
    if let Some(form) = form {
        key.push_str(&title_case(form.trim()).replace("_Form", "").replace('_', ""));
    }
    key
}

/// File/link name for a display name: parentheses, apostrophes and spaces
/// are dropped.
pub fn page_name(display: &str) -> String {
    display
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '\'' | ' '))
        .collect()
}

pub fn time_of_day(token: &str) -> String {
    TIME_OF_DAY.get(token.trim()).unwrap_or(&"Unknown").to_string()
}

pub fn stat_comparison(token: &str) -> String {
    STAT_COMPARISON.get(token.trim()).unwrap_or(&"Unknown").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("DYNAMICPUNCH", "Dynamicpunch")]
    #[case("PSYCHIC_M", "Psychic")]
    #[case("U_TURN", "U-turn")]
    #[case("WILL_O_WISP", "Will-O-Wisp")]
    #[case("THUNDER_WAVE", "Thunder Wave")]
    #[case("  SURF ", "Surf")]
    fn test_format_move_name(#[case] token: &str, #[case] expected: &str) {
        assert_eq!(format_move_name(token), expected);
    }

    #[rstest]
    #[case("TM01", "TM 01")]
    #[case("HM07", "HM 07")]
    #[case("MT12", "Move Tutor")]
    #[case(" Event ", "Event")]
    fn test_format_move_category(#[case] token: &str, #[case] expected: &str) {
        assert_eq!(format_move_category(token), expected);
    }

    #[rstest]
    #[case("mime_jr_", "Mime Jr.", "MimeJr", "MimeJr")]
    #[case("raticate_plain", "Raticate", "RaticatePlain", "RaticateAlolan")]
    #[case("pikachu_plain", "Pikachu", "PikachuPlain", "PikachuPlain")]
    #[case("bulbasaur", "Bulbasaur", "Bulbasaur", "Bulbasaur")]
    #[case("tauros_paldean_fire", "Tauros (Blaze Breed) (Paldean)", "", "TaurosPaldeanFire")]
    #[case("raichu_alolan", "Raichu (Alolan)", "RaichuAlolan", "RaichuAlolan")]
    fn test_creature_names(
        #[case] file_key: &str,
        #[case] display: &str,
        #[case] egg: &str,
        #[case] evo: &str,
    ) {
        let names = creature_names(file_key);
        assert_eq!(names.display, display);
        assert_eq!(names.egg_moves_key, egg);
        assert_eq!(names.evo_attacks_key, evo);
    }

    #[test]
    fn test_title_case_follows_non_letters() {
        assert_eq!(title_case("farfetch_d"), "Farfetch_D");
        assert_eq!(title_case("EGG_WATER_1"), "Egg_Water_1");
        assert_eq!(title_case("mr. mime"), "Mr. Mime");
    }

    #[test]
    fn test_family_key_strips_form_suffix() {
        assert_eq!(family_key("RATTATA", Some("ALOLAN_FORM")), "RattataAlolan");
        assert_eq!(family_key("FARFETCH_D", Some("GALARIAN_FORM")), "FarfetchDGalarian");
        assert_eq!(family_key("PIKACHU", None), "Pikachu");
    }

    #[test]
    fn test_page_name() {
        assert_eq!(page_name("Farfetch'd (Galarian)"), "FarfetchdGalarian");
        assert_eq!(page_name("Mr. Mime"), "Mr.Mime");
    }

    #[test]
    fn test_lookups_fall_back_to_unknown() {
        assert_eq!(time_of_day("TR_MORNDAY"), "Morning/Day");
        assert_eq!(stat_comparison("ATK_EQ_DEF"), "Atk equals Def");
        assert_eq!(time_of_day("TR_NEVER"), "Unknown");
    }

    #[test]
    fn test_normalizer_is_deterministic_and_non_empty() {
        for token in ["A", "X_SCISSOR", "HYPER_BEAM", "MT", "tm05"] {
            let first = format_move_name(token);
            assert_eq!(first, format_move_name(token));
            assert!(!first.is_empty());
            assert!(!format_move_category(token).is_empty());
        }
    }
}
