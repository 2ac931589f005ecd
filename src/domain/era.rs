use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// The twelve historical eras the site is organized around.
///
/// Each era carries three parallel identifiers: a positive integer index
/// (chronological order), an on-disk asset folder name, and a public URL
/// slug. The enum is the single authored source for all three; the reverse
/// lookups are derived from it and can never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    AncientEgyptAndMesopotamia,
    AncientGreeceAndRome,
    MiddleAges,
    RenaissanceAndFarthingales,
    GeorgianPanniersAndPolonaise,
    VictorianCrinolines,
    EdwardianSBend,
    TwentiesFlapper,
    RationingAndNewLook,
    SixtiesMiniRevolution,
    PunkAndPowerDressing,
    TwentyFirstCentury,
}

static SLUG_INDEX: LazyLock<HashMap<&'static str, Era>> =
    LazyLock::new(|| Era::ALL.iter().map(|era| (era.slug(), *era)).collect());

static FOLDER_INDEX: LazyLock<HashMap<&'static str, Era>> =
    LazyLock::new(|| Era::ALL.iter().map(|era| (era.folder_name(), *era)).collect());

impl Era {
    /// All eras in chronological (index) order.
    pub const ALL: [Era; 12] = [
        Era::AncientEgyptAndMesopotamia,
        Era::AncientGreeceAndRome,
        Era::MiddleAges,
        Era::RenaissanceAndFarthingales,
        Era::GeorgianPanniersAndPolonaise,
        Era::VictorianCrinolines,
        Era::EdwardianSBend,
        Era::TwentiesFlapper,
        Era::RationingAndNewLook,
        Era::SixtiesMiniRevolution,
        Era::PunkAndPowerDressing,
        Era::TwentyFirstCentury,
    ];

    /// One-based chronological index.
    pub fn index(&self) -> u8 {
        match self {
            Era::AncientEgyptAndMesopotamia => 1,
            Era::AncientGreeceAndRome => 2,
            Era::MiddleAges => 3,
            Era::RenaissanceAndFarthingales => 4,
            Era::GeorgianPanniersAndPolonaise => 5,
            Era::VictorianCrinolines => 6,
            Era::EdwardianSBend => 7,
            Era::TwentiesFlapper => 8,
            Era::RationingAndNewLook => 9,
            Era::SixtiesMiniRevolution => 10,
            Era::PunkAndPowerDressing => 11,
            Era::TwentyFirstCentury => 12,
        }
    }

    /// Asset folder name under `assets/`, e.g. `08_1920s_flapper`.
    pub fn folder_name(&self) -> &'static str {
        match self {
            Era::AncientEgyptAndMesopotamia => "01_ancient_egypt_and_mesopotamia",
            Era::AncientGreeceAndRome => "02_ancient_greece_and_rome",
            Era::MiddleAges => "03_the_middle_ages",
            Era::RenaissanceAndFarthingales => "04_renaissance_and_farthingales",
            Era::GeorgianPanniersAndPolonaise => "05_georgian_panniers_and_polonaise",
            Era::VictorianCrinolines => "06_victorian_era_crinolines",
            Era::EdwardianSBend => "07_edwardian_s_bend",
            Era::TwentiesFlapper => "08_1920s_flapper",
            Era::RationingAndNewLook => "09_1940s_rationing_and_new_look",
            Era::SixtiesMiniRevolution => "10_1960s_mini_revolution",
            Era::PunkAndPowerDressing => "11_punk_and_power_dressing",
            Era::TwentyFirstCentury => "12_21st_century_and_gender_neutrality",
        }
    }

    /// Public URL slug, e.g. `1920s-flapper`. Routes are `/{slug}/`.
    pub fn slug(&self) -> &'static str {
        match self {
            Era::AncientEgyptAndMesopotamia => "ancient-egypt-and-mesopotamia",
            Era::AncientGreeceAndRome => "ancient-greece-and-rome",
            Era::MiddleAges => "the-middle-ages",
            Era::RenaissanceAndFarthingales => "renaissance-and-farthingales",
            Era::GeorgianPanniersAndPolonaise => "georgian-panniers-and-polonaise",
            Era::VictorianCrinolines => "victorian-era-crinolines",
            Era::EdwardianSBend => "edwardian-s-bend",
            Era::TwentiesFlapper => "1920s-flapper",
            Era::RationingAndNewLook => "1940s-rationing-and-new-look",
            Era::SixtiesMiniRevolution => "1960s-mini-revolution",
            Era::PunkAndPowerDressing => "punk-and-power-dressing",
            Era::TwentyFirstCentury => "21st-century-and-gender-neutrality",
        }
    }

    /// Human-readable display title.
    pub fn title(&self) -> &'static str {
        match self {
            Era::AncientEgyptAndMesopotamia => "Ancient Egypt and Mesopotamia",
            Era::AncientGreeceAndRome => "Ancient Greece and Rome",
            Era::MiddleAges => "The Middle Ages",
            Era::RenaissanceAndFarthingales => "Renaissance and Farthingales",
            Era::GeorgianPanniersAndPolonaise => "Georgian Panniers and Polonaise",
            Era::VictorianCrinolines => "Victorian Era Crinolines",
            Era::EdwardianSBend => "Edwardian S-Bend",
            Era::TwentiesFlapper => "1920s Flapper",
            Era::RationingAndNewLook => "1940s Rationing and New Look",
            Era::SixtiesMiniRevolution => "1960s Mini Revolution",
            Era::PunkAndPowerDressing => "Punk and Power Dressing",
            Era::TwentyFirstCentury => "21st Century and Gender Neutrality",
        }
    }

    /// Forward lookup by index. `None` when the index is not a configured era.
    pub fn from_index(index: u8) -> Option<Era> {
        Era::ALL.into_iter().find(|era| era.index() == index)
    }

    /// Reverse lookup by URL slug. Exact, case-sensitive match.
    pub fn from_slug(slug: &str) -> Option<Era> {
        SLUG_INDEX.get(slug).copied()
    }

    /// Reverse lookup by asset folder name. Exact, case-sensitive match.
    pub fn from_folder_name(name: &str) -> Option<Era> {
        FOLDER_INDEX.get(name).copied()
    }

    /// The chronologically previous era, if any.
    pub fn prev(&self) -> Option<Era> {
        Era::from_index(self.index() - 1)
    }

    /// The chronologically next era, if any.
    pub fn next(&self) -> Option<Era> {
        Era::from_index(self.index() + 1)
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn indices_cover_one_through_twelve() {
        let indices: Vec<u8> = Era::ALL.iter().map(Era::index).collect();
        assert_eq!(indices, (1..=12).collect::<Vec<u8>>());
    }

    #[test]
    fn folder_names_are_unique() {
        let names: HashSet<&str> = Era::ALL.iter().map(Era::folder_name).collect();
        assert_eq!(names.len(), Era::ALL.len());
    }

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<&str> = Era::ALL.iter().map(Era::slug).collect();
        assert_eq!(slugs.len(), Era::ALL.len());
    }

    #[test]
    fn folder_names_start_with_zero_padded_index() {
        for era in Era::ALL {
            let prefix = format!("{:02}_", era.index());
            assert!(
                era.folder_name().starts_with(&prefix),
                "{} should start with {}",
                era.folder_name(),
                prefix
            );
        }
    }

    #[test]
    fn slug_roundtrips() {
        for era in Era::ALL {
            assert_eq!(Era::from_slug(era.slug()), Some(era));
        }
    }

    #[test]
    fn folder_name_roundtrips() {
        for era in Era::ALL {
            assert_eq!(Era::from_folder_name(era.folder_name()), Some(era));
        }
    }

    #[test]
    fn index_roundtrips() {
        for era in Era::ALL {
            assert_eq!(Era::from_index(era.index()), Some(era));
        }
    }

    #[test]
    fn out_of_range_indices_miss() {
        assert_eq!(Era::from_index(0), None);
        assert_eq!(Era::from_index(13), None);
        assert_eq!(Era::from_index(u8::MAX), None);
    }

    #[test]
    fn slug_lookup_is_case_sensitive() {
        assert_eq!(Era::from_slug("ancient-egypt-and-mesopotamia").map(Era::index), Some(1));
        assert_eq!(Era::from_slug("Ancient-Egypt-And-Mesopotamia"), None);
    }

    #[test]
    fn flapper_era_identifiers() {
        let era = Era::from_index(8).unwrap();
        assert_eq!(era.folder_name(), "08_1920s_flapper");
        assert_eq!(era.slug(), "1920s-flapper");
        assert_eq!(Era::from_slug("1920s-flapper"), Some(era));
    }

    #[test]
    fn edwardian_slug_maps_to_seven() {
        assert_eq!(Era::from_slug("edwardian-s-bend").map(Era::index), Some(7));
    }

    #[test]
    fn prev_next_navigation() {
        assert_eq!(Era::AncientEgyptAndMesopotamia.prev(), None);
        assert_eq!(Era::TwentyFirstCentury.next(), None);
        assert_eq!(Era::EdwardianSBend.next(), Some(Era::TwentiesFlapper));
        assert_eq!(Era::TwentiesFlapper.prev(), Some(Era::EdwardianSBend));
    }
}
