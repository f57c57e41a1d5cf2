//! Personality quiz
//!
//! Four questions; every option adds points to each destination and the
//! highest total wins.

use serde::{Deserialize, Serialize};

use crate::models::destination::DestinationId;
use crate::security::validation::{ValidationError, ValidationResult};

/// Points per destination
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationScores {
    #[serde(rename = "paris-1889")]
    pub paris_1889: u32,
    #[serde(rename = "cretace")]
    pub cretace: u32,
    #[serde(rename = "florence-1504")]
    pub florence_1504: u32,
}

impl DestinationScores {
    pub const fn new(paris_1889: u32, cretace: u32, florence_1504: u32) -> Self {
        Self {
            paris_1889,
            cretace,
            florence_1504,
        }
    }

    pub fn get(&self, id: DestinationId) -> u32 {
        match id {
            DestinationId::Paris1889 => self.paris_1889,
            DestinationId::Cretace => self.cretace,
            DestinationId::Florence1504 => self.florence_1504,
        }
    }

    fn add(&mut self, other: &DestinationScores) {
        self.paris_1889 += other.paris_1889;
        self.cretace += other.cretace;
        self.florence_1504 += other.florence_1504;
    }

    /// Highest total; ties go to the earliest destination in catalog order
    pub fn winner(&self) -> DestinationId {
        let mut best = DestinationId::ALL[0];
        for id in DestinationId::ALL.into_iter().skip(1) {
            if self.get(id) > self.get(best) {
                best = id;
            }
        }
        best
    }

    /// Winner first, then the others by descending score
    pub fn ranking(&self) -> Vec<(DestinationId, u32)> {
        let mut ranked: Vec<_> = DestinationId::ALL
            .into_iter()
            .map(|id| (id, self.get(id)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

#[derive(Debug, Serialize)]
pub struct QuizOption {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    #[serde(skip)]
    pub scores: DestinationScores,
}

#[derive(Debug, Serialize)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub subtitle: &'static str,
    pub options: &'static [QuizOption],
}

impl QuizQuestion {
    pub fn option(&self, id: &str) -> Option<&'static QuizOption> {
        self.options.iter().find(|o| o.id == id)
    }
}

pub static QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        id: "passion",
        question: "Qu'est-ce qui vous passionne le plus ?",
        subtitle: "Votre centre d'intérêt principal guidera votre voyage",
        options: &[
            QuizOption {
                id: "art",
                label: "L'art et la créativité humaine",
                icon: "🎨",
                scores: DestinationScores::new(1, 0, 3),
            },
            QuizOption {
                id: "nature",
                label: "La nature et les grands espaces",
                icon: "🌿",
                scores: DestinationScores::new(0, 3, 0),
            },
            QuizOption {
                id: "innovation",
                label: "La science et l'innovation",
                icon: "⚡",
                scores: DestinationScores::new(3, 1, 1),
            },
            QuizOption {
                id: "culture",
                label: "La gastronomie et l'art de vivre",
                icon: "🍷",
                scores: DestinationScores::new(2, 0, 2),
            },
        ],
    },
    QuizQuestion {
        id: "risk",
        question: "Quel est votre rapport au risque ?",
        subtitle: "Chaque époque a son niveau de danger temporel",
        options: &[
            QuizOption {
                id: "safe",
                label: "Je préfère le confort et l'élégance",
                icon: "🛡️",
                scores: DestinationScores::new(3, 0, 2),
            },
            QuizOption {
                id: "moderate",
                label: "Un peu de frisson, mais encadré",
                icon: "⚖️",
                scores: DestinationScores::new(1, 1, 3),
            },
            QuizOption {
                id: "extreme",
                label: "L'adrénaline, c'est ma raison de vivre",
                icon: "🔥",
                scores: DestinationScores::new(0, 3, 0),
            },
        ],
    },
    QuizQuestion {
        id: "dream",
        question: "Que rêvez-vous de voir de vos propres yeux ?",
        subtitle: "Le moment qui justifierait à lui seul le voyage",
        options: &[
            QuizOption {
                id: "monument",
                label: "Un monument mythique en construction",
                icon: "🗼",
                scores: DestinationScores::new(3, 0, 1),
            },
            QuizOption {
                id: "creature",
                label: "Des créatures disparues depuis des millions d'années",
                icon: "🦖",
                scores: DestinationScores::new(0, 3, 0),
            },
            QuizOption {
                id: "genius",
                label: "Un génie au travail dans son atelier",
                icon: "🖌️",
                scores: DestinationScores::new(1, 0, 3),
            },
            QuizOption {
                id: "event",
                label: "Un événement historique majeur",
                icon: "📜",
                scores: DestinationScores::new(2, 1, 2),
            },
        ],
    },
    QuizQuestion {
        id: "vibe",
        question: "Quelle ambiance vous attire le plus ?",
        subtitle: "L'atmosphère qui vous fera sentir à votre place",
        options: &[
            QuizOption {
                id: "festive",
                label: "Festive et lumineuse — une ville en fête",
                icon: "✨",
                scores: DestinationScores::new(3, 0, 1),
            },
            QuizOption {
                id: "raw",
                label: "Sauvage et primitive — un monde sans humains",
                icon: "🌋",
                scores: DestinationScores::new(0, 3, 0),
            },
            QuizOption {
                id: "refined",
                label: "Raffinée et politique — cours et palais",
                icon: "👑",
                scores: DestinationScores::new(1, 0, 3),
            },
        ],
    },
];

/// A submitted answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub question_id: String,
    pub answer_id: String,
}

impl QuizAnswer {
    pub fn new(question_id: &str, answer_id: &str) -> Self {
        Self {
            question_id: question_id.to_string(),
            answer_id: answer_id.to_string(),
        }
    }
}

/// Scored quiz
#[derive(Debug, Clone)]
pub struct QuizScore {
    pub scores: DestinationScores,
    pub winner: DestinationId,
    /// Chosen options, in question order
    pub chosen: Vec<&'static QuizOption>,
}

/// Sums the option scores of a complete set of answers.
///
/// Every question must be answered exactly once.
pub fn score_answers(answers: &[QuizAnswer]) -> ValidationResult<QuizScore> {
    let mut chosen: Vec<Option<&'static QuizOption>> = vec![None; QUESTIONS.len()];

    for answer in answers {
        let (index, question) = QUESTIONS
            .iter()
            .enumerate()
            .find(|(_, q)| q.id == answer.question_id)
            .ok_or_else(|| ValidationError::Custom {
                field: "question_id".to_string(),
                message: format!("Unknown question: {}", answer.question_id),
            })?;

        let option = question
            .option(&answer.answer_id)
            .ok_or_else(|| ValidationError::Custom {
                field: "answer_id".to_string(),
                message: format!(
                    "Unknown answer '{}' for question '{}'",
                    answer.answer_id, question.id
                ),
            })?;

        if chosen[index].replace(option).is_some() {
            return Err(ValidationError::Custom {
                field: "answers".to_string(),
                message: format!("Question '{}' answered more than once", question.id),
            });
        }
    }

    let chosen = chosen
        .into_iter()
        .zip(QUESTIONS)
        .map(|(option, question)| {
            option.ok_or_else(|| ValidationError::MissingField {
                field: format!("answers.{}", question.id),
            })
        })
        .collect::<ValidationResult<Vec<_>>>()?;

    let mut scores = DestinationScores::default();
    for option in &chosen {
        scores.add(&option.scores);
    }

    Ok(QuizScore {
        scores,
        winner: scores.winner(),
        chosen,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(ids: [&str; 4]) -> Vec<QuizAnswer> {
        QUESTIONS
            .iter()
            .zip(ids)
            .map(|(q, a)| QuizAnswer::new(q.id, a))
            .collect()
    }

    #[test]
    fn test_paris_profile() {
        let score = score_answers(&answers(["innovation", "safe", "monument", "festive"])).unwrap();
        assert_eq!(score.scores, DestinationScores::new(12, 1, 5));
        assert_eq!(score.winner, DestinationId::Paris1889);
        assert_eq!(score.chosen.len(), 4);
    }

    #[test]
    fn test_cretace_profile() {
        let score = score_answers(&answers(["nature", "extreme", "creature", "raw"])).unwrap();
        assert_eq!(score.scores, DestinationScores::new(0, 12, 0));
        assert_eq!(score.winner, DestinationId::Cretace);
    }

    #[test]
    fn test_florence_profile() {
        let score = score_answers(&answers(["art", "moderate", "genius", "refined"])).unwrap();
        assert_eq!(score.winner, DestinationId::Florence1504);
    }

    #[test]
    fn test_answer_order_does_not_matter() {
        let mut reversed = answers(["art", "moderate", "genius", "refined"]);
        reversed.reverse();
        let score = score_answers(&reversed).unwrap();
        assert_eq!(score.winner, DestinationId::Florence1504);
        assert_eq!(score.chosen[0].id, "art");
    }

    #[test]
    fn test_tie_goes_to_catalog_order() {
        // culture 2/0/2, safe 3/0/2, event 2/1/2, refined 1/0/3 -> 8/1/9
        let score = score_answers(&answers(["culture", "safe", "event", "refined"])).unwrap();
        assert_eq!(score.scores, DestinationScores::new(8, 1, 9));

        let tied = DestinationScores::new(5, 5, 5);
        assert_eq!(tied.winner(), DestinationId::Paris1889);
        let tied = DestinationScores::new(1, 5, 5);
        assert_eq!(tied.winner(), DestinationId::Cretace);
    }

    #[test]
    fn test_missing_question_is_rejected() {
        let mut partial = answers(["art", "moderate", "genius", "refined"]);
        partial.pop();
        let err = score_answers(&partial).unwrap_err();
        assert_eq!(err.field(), "answers.vibe");
    }

    #[test]
    fn test_unknown_and_duplicate_answers_are_rejected() {
        let mut bad = answers(["art", "moderate", "genius", "refined"]);
        bad[0].answer_id = "sport".to_string();
        assert_eq!(score_answers(&bad).unwrap_err().field(), "answer_id");

        let mut duplicate = answers(["art", "moderate", "genius", "refined"]);
        duplicate.push(QuizAnswer::new("passion", "nature"));
        assert_eq!(score_answers(&duplicate).unwrap_err().field(), "answers");

        let unknown = vec![QuizAnswer::new("budget", "low")];
        assert_eq!(score_answers(&unknown).unwrap_err().field(), "question_id");
    }

    #[test]
    fn test_ranking_puts_winner_first() {
        let ranking = DestinationScores::new(2, 7, 4).ranking();
        assert_eq!(ranking[0], (DestinationId::Cretace, 7));
        assert_eq!(ranking[2], (DestinationId::Paris1889, 2));
    }

    #[test]
    fn test_scores_serialize_with_destination_ids() {
        let json = serde_json::to_value(DestinationScores::new(1, 2, 3)).unwrap();
        assert_eq!(json["paris-1889"], 1);
        assert_eq!(json["cretace"], 2);
        assert_eq!(json["florence-1504"], 3);
    }
}
