//! Built-in knowledge table.
//!
//! Entry order is the tie-break order of the matcher.

use super::KnowledgeEntry;

pub static KNOWLEDGE_BASE: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        keywords: &[
            "vêtement", "vetement", "habit", "tenue", "porter", "costume", "1504", "pourpoint",
        ],
        response: "Ah, Florence en 1504... une époque où le vêtement était un langage à part entière. \
Pour les hommes, un pourpoint de velours sombre, des chausses ajustées et une beretta — le couvre-chef des érudits — seront de rigueur. \
Pour les femmes, une gamurra à manches bouffantes, cintrée à la taille, dans des tons de cramoisi ou d'azur. \
Notre atelier de costumerie vous préparera un trousseau complet avant le départ.",
        priority: 10,
    },
    KnowledgeEntry {
        keywords: &["florence", "renaissance", "médicis", "medicis", "vinci", "michel-ange"],
        response: "Florence, 1504. L'air vibre encore de l'énergie créatrice qui a changé le monde. \
Vous marcherez dans les mêmes rues que Léonard de Vinci et Michel-Ange — ce dernier achève justement son David cette année-là. \
Niveau de risque : Modéré. Les intrigues politiques des Médicis peuvent être... imprévisibles.",
        priority: 5,
    },
    KnowledgeEntry {
        keywords: &[
            "sécurité", "securite", "danger", "risque", "protection", "crétacé", "cretace", "survie",
        ],
        response: "Le Crétacé supérieur, il y a 68 millions d'années... un monde aussi majestueux que mortel. \
Nos protocoles : combinaison exosquelettique titane, champ de force personnel (3 mètres), \
dôme d'invisibilité (500 mètres), balise d'extraction (4,7 secondes). \
Les T-Rex ont un champ de vision basé sur le mouvement. Si l'alarme retentit : immobilité absolue.",
        priority: 10,
    },
    KnowledgeEntry {
        keywords: &["dinosaure", "t-rex", "triceratops"],
        response: "Vous observerez des Tricératops paître dans les plaines de magnolias, des Ptéranodons fendre le ciel primordial, \
et peut-être un Tyrannosaure dans toute sa terrifiante majesté. \
Vous verrez ce qu'aucun être humain n'était censé voir. C'est le privilège ultime du voyageur temporel.",
        priority: 5,
    },
    KnowledgeEntry {
        keywords: &["voir", "visite", "1889", "exposition", "paris", "eiffel", "tour"],
        response: "Paris, 1889. Vous assisterez à l'inauguration de la Tour Eiffel, \
visiterez la Galerie des Machines, les premières démonstrations d'électricité. \
Flânez sur les Grands Boulevards, assistez à un spectacle au Moulin Rouge. \
Le tout baigné dans la lumière dorée de la Belle Époque.",
        priority: 10,
    },
    KnowledgeEntry {
        keywords: &["prix", "tarif", "coût", "cout", "combien", "budget"],
        response: "Paris 1889 : à partir de 12 500 €. Florence 1504 : à partir de 18 000 €. Crétacé : à partir de 45 000 €. \
Tous les forfaits incluent l'assurance paradoxe temporel, l'équipement d'époque et le guide chrononaute.",
        priority: 8,
    },
    KnowledgeEntry {
        keywords: &["réserver", "reserver", "réservation", "reservation"],
        response: "Cliquez sur le bouton doré « Réserver » dans la barre de navigation. \
Vous choisirez votre époque, votre date de départ et le nombre de voyageurs. \
Notre équipe du Chronoport Central vous contactera sous 24h.",
        priority: 8,
    },
    KnowledgeEntry {
        keywords: &["paradoxe", "changer", "modifier", "histoire", "passé"],
        response: "Notre technologie repose sur la « Bulle d'Observation » : vous vivrez l'Histoire sans la réécrire. \
L'effet papillon est réel, c'est pourquoi chaque geste est encadré. \
C'est la promesse fondatrice de TimeTravel Agency.",
        priority: 7,
    },
    KnowledgeEntry {
        keywords: &["machine", "technologie", "comment", "fonctionne", "quantique"],
        response: "Distorsion Quantique Contrôlée. Le transfert dure exactement 7 secondes. \
Un léger vertige, une sensation de lumière dorée, puis le monde autour de vous sera... différent. \
Le retour est garanti. Vous ne serez jamais perdu dans le temps.",
        priority: 7,
    },
    KnowledgeEntry {
        keywords: &["bonjour", "salut", "hello", "hey", "coucou"],
        response: "Salutations, voyageur. Je suis Chronos, gardien des timelines. \
Quelle époque fait battre votre cœur ? Paris 1889 ? Le Crétacé ? Florence 1504 ?",
        priority: 3,
    },
    KnowledgeEntry {
        keywords: &["merci", "super", "génial", "parfait"],
        response: "C'est un honneur de vous guider à travers les méandres du temps. \
Le temps est le plus grand des voyages. Et vous êtes sur le point de le vivre.",
        priority: 2,
    },
    KnowledgeEntry {
        keywords: &["qui es-tu", "qui es tu", "ton nom", "chronos"],
        response: "Je suis Chronos — nommé d'après le titan primordial qui personnifie le Temps. \
Expert en voyage temporel et votre guide personnel chez TimeTravel Agency. \
Le temps est ma spécialité... et ma demeure.",
        priority: 6,
    },
];

pub static DEFAULT_RESPONSES: &[&str] = &[
    "Fascinante question, voyageur. Je peux vous orienter vers nos trois destinations : Paris 1889, le Crétacé ou Florence 1504. Laquelle éveille votre curiosité ?",
    "Le temps recèle bien des mystères. Puis-je vous renseigner sur nos destinations, nos tarifs ou nos protocoles de sécurité ?",
    "N'hésitez pas à me questionner sur nos voyages vers Paris 1889, Florence 1504 ou le Crétacé. Là, mes connaissances sont infinies.",
];
