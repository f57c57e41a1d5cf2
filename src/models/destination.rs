//! Destination catalog
//!
//! The three expeditions offered by the agency. Catalog order is also the
//! tie-break order of the quiz.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Destination identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DestinationId {
    #[serde(rename = "paris-1889")]
    Paris1889,
    #[serde(rename = "cretace")]
    Cretace,
    #[serde(rename = "florence-1504")]
    Florence1504,
}

impl DestinationId {
    /// All destinations, in catalog order
    pub const ALL: [DestinationId; 3] = [
        DestinationId::Paris1889,
        DestinationId::Cretace,
        DestinationId::Florence1504,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DestinationId::Paris1889 => "paris-1889",
            DestinationId::Cretace => "cretace",
            DestinationId::Florence1504 => "florence-1504",
        }
    }

    /// Catalog entry for this id
    pub fn destination(&self) -> &'static Destination {
        match self {
            DestinationId::Paris1889 => &CATALOG[0],
            DestinationId::Cretace => &CATALOG[1],
            DestinationId::Florence1504 => &CATALOG[2],
        }
    }

    pub fn label(&self) -> &'static str {
        self.destination().title
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DestinationId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DestinationId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("Unknown destination: {}", s))
    }
}

/// Catalog entry
#[derive(Debug, Clone, Serialize)]
pub struct Destination {
    pub id: DestinationId,
    pub title: &'static str,
    pub expedition_name: &'static str,
    pub epoch: &'static str,
    pub description: &'static str,
    /// Starting price per traveler in euros
    pub base_price_eur: u32,
    pub danger: &'static str,
    /// 1 (low) to 5 (extreme)
    pub danger_level: u8,
    /// Historical year, negative before Christ
    pub temporal_year: i64,
    pub climate: &'static str,
    pub language: &'static str,
    pub currency: &'static str,
    pub duration: &'static str,
    pub max_group_size: u32,
    pub highlights: &'static [&'static str],
}

pub static CATALOG: [Destination; 3] = [
    Destination {
        id: DestinationId::Paris1889,
        title: "Paris 1889",
        expedition_name: "Expédition Paris 1889",
        epoch: "Exposition Universelle",
        description: "Revivez l'effervescence de l'Exposition Universelle et assistez à l'inauguration de la Tour Eiffel. \
Plongez dans le Paris de la Belle Époque, entre innovation et élégance.",
        base_price_eur: 12_500,
        danger: "Faible",
        danger_level: 1,
        temporal_year: 1889,
        climate: "Tempéré océanique — Été doux (18-25°C), averses possibles",
        language: "Français (XIXe siècle) — Quelques tournures archaïques",
        currency: "Franc français (pièces d'or et d'argent fournies par l'agence)",
        duration: "3 à 7 jours d'immersion",
        max_group_size: 6,
        highlights: &[
            "Inauguration de la Tour Eiffel — vue depuis le Champ-de-Mars",
            "Visite de la Galerie des Machines et ses innovations révolutionnaires",
            "Soirée au Moulin Rouge, qui ouvre ses portes cette année-là",
            "Dégustation gastronomique au Grand Véfour avec le chef Escoffier",
            "Promenade sur les Grands Boulevards illuminés à l'électricité",
        ],
    },
    Destination {
        id: DestinationId::Cretace,
        title: "Crétacé",
        expedition_name: "Expédition Crétacé",
        epoch: "-68 millions d'années",
        description: "Explorez la nature sauvage du Crétacé supérieur. Observez les géants préhistoriques dans leur habitat naturel. \
Combinaison de protection et guide paléontologue inclus.",
        base_price_eur: 45_000,
        danger: "Extrême",
        danger_level: 5,
        temporal_year: -68_000_000,
        climate: "Tropical humide — 28-35°C constant, atmosphère riche en oxygène",
        language: "Aucune — Communication uniquement au sein du groupe",
        currency: "Aucune — Économie inexistante. Tout le matériel est fourni.",
        duration: "24 à 72 heures d'immersion (maximum strict)",
        max_group_size: 4,
        highlights: &[
            "Observation de Tyrannosaures en chasse depuis un poste blindé camouflé",
            "Troupeaux de Tricératops traversant les plaines de magnolias primitifs",
            "Vol de Ptéranodons au-dessus de la canopée",
            "Flore préhistorique intacte : fougères géantes, conifères araucarias, premières fleurs",
            "Nuit dans le dôme d'observation sous un ciel sans pollution lumineuse",
        ],
    },
    Destination {
        id: DestinationId::Florence1504,
        title: "Florence 1504",
        expedition_name: "Expédition Florence 1504",
        epoch: "Renaissance italienne",
        description: "Vivez l'apogée de la Renaissance aux côtés de Léonard de Vinci et Michel-Ange. \
Découvrez Florence à son âge d'or, entre art, science et politique des Médicis.",
        base_price_eur: 18_000,
        danger: "Modéré",
        danger_level: 3,
        temporal_year: 1504,
        climate: "Méditerranéen — Étés chauds (28-33°C), hivers doux",
        language: "Italien toscan (Renaissance) — Cours accéléré de 2 jours inclus",
        currency: "Florin d'or (répliques authentiques fournies par l'agence)",
        duration: "5 à 10 jours d'immersion",
        max_group_size: 5,
        highlights: &[
            "Visite de l'atelier de Michel-Ange pendant la finalisation du David",
            "Observation des carnets de Léonard de Vinci dans son studio privé",
            "Dîner de gala dans le Palazzo Médicis avec la haute société florentine",
            "Promenade sur le Ponte Vecchio parmi les orfèvres et marchands de soie",
            "Messe à la Cathédrale Santa Maria del Fiore sous le dôme de Brunelleschi",
        ],
    },
];

/// Formats a historical year the French way: "1889 ap. J.-C.",
/// "68 000 000 av. J.-C." (narrow no-break space as thousands separator).
pub fn format_temporal_year(year: i64) -> String {
    if year < 0 {
        format!("{} av. J.-C.", group_thousands(year.unsigned_abs()))
    } else {
        format!("{} ap. J.-C.", year)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{202F}');
        }
        grouped.push(c);
    }

    grouped
}
