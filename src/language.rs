//! Language Acquisition Calculator
//!
//! Four session kinds rotate through the week. Input alternates direction
//! by week parity, speaking cycles through three shadowing stages and the
//! writing sprint shortens as fluency builds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::weeks_elapsed;
use crate::models::{DetailedStep, TaskOverride};

const SHADOWING_STAGES: [&str; 3] = [
    "Active Listening",
    "Paused Repetition",
    "Simultaneous Shadowing",
];

const SHADOWING_INSTRUCTIONS: [&str; 3] = [
    "Escucha activa. Lee mientras escuchas. Subraya énfasis.",
    "Escucha una frase. PAUSA. Repite imitando la música.",
    "Habla AL MISMO TIEMPO que el orador. No te detengas.",
];

const WRITING_START_MINUTES: u32 = 30;
const WRITING_MIN_MINUTES: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageDay {
    Input,
    Speaking,
    Writing,
    Integrated,
}

/// Translation direction of the input session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationDirection {
    /// Foreign to native, on even weeks
    Decoding,
    /// Native back to foreign
    Encoding,
}

pub fn translation_direction(week: u32) -> TranslationDirection {
    if week % 2 == 0 {
        TranslationDirection::Decoding
    } else {
        TranslationDirection::Encoding
    }
}

pub fn shadowing_stage(week: u32) -> usize {
    (week % SHADOWING_STAGES.len() as u32) as usize
}

/// Minutes allowed for the journal sprint, never below the floor
pub fn writing_minutes(week: u32) -> u32 {
    WRITING_START_MINUTES
        .saturating_sub(week)
        .max(WRITING_MIN_MINUTES)
}

pub fn calculate(date: NaiveDate, day: LanguageDay) -> TaskOverride {
    let week = weeks_elapsed(date);
    match day {
        LanguageDay::Input => input(week),
        LanguageDay::Speaking => speaking(week),
        LanguageDay::Writing => writing(week),
        LanguageDay::Integrated => integrated(),
    }
}

fn input(week: u32) -> TaskOverride {
    let direction = translation_direction(week);
    let (focus, detail, block) = match direction {
        TranslationDirection::Decoding => (
            "Decoding (L2->L1)",
            "Understanding Nuance",
            DetailedStep::new(
                "Phase 1: Decoding",
                &[
                    "1. Selecciona un texto corto (100 palabras) en Inglés.",
                    "2. Tradúcelo a tu idioma nativo mentalmente.",
                    "3. Escríbelo. Asegúrate de entender el 100%.",
                ],
            ),
        ),
        TranslationDirection::Encoding => (
            "Encoding (L1->L2)",
            "Reconstructing Memory",
            DetailedStep::new(
                "Phase 2: Reconstruction",
                &[
                    "1. Toma la traducción que hiciste la semana pasada.",
                    "2. SIN mirar el original, tradúcelo de vuelta al Inglés.",
                    "3. Compara con el original y marca errores.",
                ],
            ),
        ),
    };

    TaskOverride {
        title: Some("Polyglot: Bidirectional Translation".to_string()),
        methodology: Some("Luca Lampariello Method".to_string()),
        focus_metric: Some(focus.to_string()),
        details: Some(vec!["Deep Analysis".to_string(), detail.to_string()]),
        extended_content: Some(vec![
            block,
            DetailedStep::new("Micro-Habit", &["Review Anki Deck (10 min)"]),
        ]),
        ..Default::default()
    }
}

fn speaking(week: u32) -> TaskOverride {
    let stage = shadowing_stage(week);

    TaskOverride {
        title: Some(format!("Speaking: {}", SHADOWING_STAGES[stage])),
        methodology: Some("Shadowing Technique".to_string()),
        focus_metric: Some("Prosody & Flow".to_string()),
        details: Some(vec![
            "Mimicry".to_string(),
            "Intonation Focus".to_string(),
            "Recorded Feedback".to_string(),
        ]),
        extended_content: Some(vec![
            DetailedStep::new("Material", &["TED Talk (Julian Treasure)", "Transcript abierto"]),
            DetailedStep::new("Execution", &[SHADOWING_INSTRUCTIONS[stage]]),
            DetailedStep::new("Feedback", &["Grábate 1 minuto. Compárate con el original."]),
        ]),
        ..Default::default()
    }
}

fn writing(week: u32) -> TaskOverride {
    let minutes = writing_minutes(week);

    TaskOverride {
        title: Some("Writing: Metacognitive Journal".to_string()),
        methodology: Some("Output Hypothesis".to_string()),
        focus_metric: Some(format!("{} MIN SPRINT", minutes)),
        details: Some(vec![
            "No Dictionary".to_string(),
            "Flow State".to_string(),
            "Self-Correction".to_string(),
        ]),
        extended_content: Some(vec![
            DetailedStep::computed(
                "Task 1: The Journal",
                vec![
                    "Escribe sobre tu día o un tema abstracto.".to_string(),
                    format!("Tiempo límite: {} minutos.", minutes),
                    "NO pares de escribir.".to_string(),
                ],
            ),
            DetailedStep::new(
                "Task 2: The Audit",
                &[
                    "Lee lo que escribiste.",
                    "Identifica 3 errores gramaticales tú mismo.",
                    "Busca sinónimos para palabras repetidas.",
                ],
            ),
        ]),
        ..Default::default()
    }
}

fn integrated() -> TaskOverride {
    TaskOverride {
        title: Some("TOEFL: Integrated Simulacrum".to_string()),
        methodology: Some("Test Specificity".to_string()),
        focus_metric: Some("New Format 2026".to_string()),
        details: Some(vec![
            "Full Section Test".to_string(),
            "No Breaks".to_string(),
            "Score Tracking".to_string(),
        ]),
        extended_content: Some(vec![
            DetailedStep::new("Setup", &["Entorno silencioso.", "Solo hojas en blanco y lápiz."]),
            DetailedStep::new(
                "Execution",
                &[
                    "Realizar 1 Speaking Integrado",
                    "Realizar 1 Writing Integrado (Academic Discussion)",
                ],
            ),
            DetailedStep::new(
                "Review",
                &["¿Usaste las plantillas?", "¿Te trabaste más de 5 segundos?"],
            ),
        ]),
        ..Default::default()
    }
}
