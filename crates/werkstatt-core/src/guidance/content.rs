//! Static learner-facing guidance content, one block per CRISP-DM phase.

use crate::models::CrispDmPhaseId;

use super::{HintPriority, TutorHint};

/// Static guidance block for one phase.
pub(super) struct PhaseContent {
    pub introduction: &'static str,
    pub objectives: &'static [&'static str],
    pub hints: &'static [TutorHint],
    pub next_steps: &'static [&'static str],
}

pub(super) const fn content_for(phase: CrispDmPhaseId) -> &'static PhaseContent {
    match phase {
        CrispDmPhaseId::BusinessUnderstanding => &BUSINESS_UNDERSTANDING,
        CrispDmPhaseId::DataUnderstanding => &DATA_UNDERSTANDING,
        CrispDmPhaseId::DataPreparation => &DATA_PREPARATION,
        CrispDmPhaseId::Modeling => &MODELING,
        CrispDmPhaseId::Evaluation => &EVALUATION,
        CrispDmPhaseId::Deployment => &DEPLOYMENT,
    }
}

static BUSINESS_UNDERSTANDING: PhaseContent = PhaseContent {
    introduction: "In dieser Phase definierst du das Projektziel aus Business-Sicht.",
    objectives: &[
        "Geschäftsziel klar formulieren",
        "Erfolgskriterien definieren",
        "Ressourcen und Risiken einschätzen",
    ],
    hints: &[TutorHint {
        id: "bu-1",
        title: "Definiere messbare Ziele",
        content: "Ein gutes DS-Projekt hat klare, messbare Erfolgskriterien. \
                  \"Kundenabwanderung reduzieren\" ist vage – \"Churn-Rate um 15% senken\" \
                  ist messbar.",
        glossary_terms: &["kpi", "zielmetriken"],
        priority: HintPriority::Tip,
    }],
    next_steps: &[
        "Projektziel dokumentieren",
        "Erfolgskriterien festlegen",
        "Datenquellen identifizieren",
    ],
};

static DATA_UNDERSTANDING: PhaseContent = PhaseContent {
    introduction: "Hier lernst du deine Daten kennen und prüfst die Datenqualität.",
    objectives: &[
        "Datenquellen erkunden",
        "Datenqualität bewerten",
        "Erste Muster und Anomalien erkennen",
    ],
    hints: &[TutorHint {
        id: "du-1",
        title: "Prüfe auf fehlende Werte",
        content: "Fehlende Werte können dein Modell stark beeinflussen. Dokumentiere, \
                  wie viele es gibt und warum.",
        glossary_terms: &["fehlende-werte", "missing-values"],
        priority: HintPriority::Warning,
    }],
    next_steps: &[
        "Deskriptive Statistik erstellen",
        "Korrelationen untersuchen",
        "Auf fehlende Werte und Ausreißer achten",
    ],
};

static DATA_PREPARATION: PhaseContent = PhaseContent {
    introduction: "Daten bereinigen und für das Modelltraining vorbereiten.",
    objectives: &[
        "Fehlende Werte behandeln",
        "Feature Engineering durchführen",
        "Daten transformieren und skalieren",
    ],
    hints: &[TutorHint {
        id: "dp-1",
        title: "Feature Engineering",
        content: "Oft sind abgeleitete Features wichtiger als die Rohdaten. Kombiniere \
                  Features oder erstelle neue aus Domänenwissen.",
        glossary_terms: &["feature-engineering", "feature"],
        priority: HintPriority::Tip,
    }],
    next_steps: &[
        "Fehlende Werte imputieren",
        "Kategoriale Variablen kodieren",
        "Features skalieren",
    ],
};

static MODELING: PhaseContent = PhaseContent {
    introduction: "ML-Modelle trainieren und optimieren.",
    objectives: &[
        "Passende Algorithmen auswählen",
        "Modelle trainieren",
        "Hyperparameter optimieren",
    ],
    hints: &[TutorHint {
        id: "m-1",
        title: "Start simple",
        content: "Beginne mit einem einfachen Baseline-Modell. Komplexere Modelle lohnen \
                  sich nur, wenn die Baseline nicht ausreicht.",
        glossary_terms: &["baseline", "modell-ml"],
        priority: HintPriority::Tip,
    }],
    next_steps: &[
        "Train-Test-Split durchführen",
        "Baseline-Modell erstellen",
        "Verschiedene Algorithmen vergleichen",
    ],
};

static EVALUATION: PhaseContent = PhaseContent {
    introduction: "Modellperformance bewerten und validieren.",
    objectives: &[
        "Performance-Metriken berechnen",
        "Modell gegen Erfolgskriterien prüfen",
        "Entscheidung für Deployment treffen",
    ],
    hints: &[TutorHint {
        id: "e-1",
        title: "Wähle die richtige Metrik",
        content: "Accuracy ist nicht immer die beste Wahl. Bei unbalancierten Klassen \
                  sind Precision, Recall und F1-Score aussagekräftiger.",
        glossary_terms: &["accuracy", "precision", "recall", "f1-score"],
        priority: HintPriority::Warning,
    }],
    next_steps: &[
        "Confusion Matrix analysieren",
        "Business-Impact abschätzen",
        "Deployment-Entscheidung dokumentieren",
    ],
};

static DEPLOYMENT: PhaseContent = PhaseContent {
    introduction: "Modell in Produktion bringen und überwachen.",
    objectives: &[
        "Deployment-Strategie festlegen",
        "Monitoring einrichten",
        "Wartungsplan erstellen",
    ],
    hints: &[TutorHint {
        id: "d-1",
        title: "Monitoring ist kritisch",
        content: "Modelle können im Zeitverlauf schlechter werden (Concept Drift). \
                  Überwache die Performance kontinuierlich.",
        glossary_terms: &["concept-drift", "monitoring", "deployment"],
        priority: HintPriority::Warning,
    }],
    next_steps: &[
        "Deployment-Pipeline aufsetzen",
        "Alerts für Performance-Drops",
        "Retraining-Strategie planen",
    ],
};
