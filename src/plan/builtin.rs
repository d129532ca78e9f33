//! Built-in training year: three phases and the five tracked goals

use crate::calendar::ymd;
use crate::models::{
  DetailedStep, GoalCategory, GoalDefinition, GoalIcon, Phase, ScheduleDay, Task, TaskType,
};

/// ---------------------------------------------------------------------------
/// Task Builders
/// ---------------------------------------------------------------------------

fn physical(title: &str, details: &[&str], duration: &str, task_type: TaskType) -> Task {
  Task::new(task_type, title, details, duration)
}

fn intellectual(title: &str, details: &[&str], duration: &str) -> Task {
  Task::new(TaskType::LanguagePrep, title, details, duration)
}

fn rest_physical() -> Task {
  physical("Descanso Activo", &["Estiramientos", "Movilidad"], "30 min", TaskType::Rest)
}

fn rest_intellectual() -> Task {
  intellectual(
    "Descanso Mental",
    &["Consumo pasivo de contenido en Inglés (Netflix/YouTube)"],
    "Optional",
  )
}

fn day(physical: Task, intellectual: Task) -> ScheduleDay {
  ScheduleDay {
    physical,
    intellectual,
  }
}

/// ---------------------------------------------------------------------------
/// Phase 1: Base Building (Dec - Mar)
/// ---------------------------------------------------------------------------

fn base_building_schedule() -> [ScheduleDay; 7] {
  [
    // Sunday: push & skill
    day(
      physical(
        "PUSH & Skill (Planche)",
        &["Full Planche Leans", "Pseudo-Planche Pushups", "Dips", "Military Press"],
        "90 min",
        TaskType::Calisthenics,
      )
      .with_steps(vec![
        DetailedStep::new(
          "1. Full Planche Lean",
          &["4 series x 15s", "Protracción máxima escapular", "Inclinación progresiva"],
        )
        .with_note("Usa bandas si es necesario para mantener la forma."),
        DetailedStep::new(
          "2. Flexiones en Pseudo-Planche",
          &["4 series x 8 reps", "Manos a la altura de la cadera", "Bloqueo completo arriba"],
        ),
        DetailedStep::new(
          "3. Fondos en Paralelas (Profundos)",
          &["4 series x 10 reps", "Bajar hasta romper 90 grados", "Controlar el tempo"],
        ),
        DetailedStep::new(
          "4. Press Militar (Mancuernas)",
          &["3 series x 10 reps", "Rango completo de movimiento"],
        )
        .with_note("Cuidar las muñecas."),
      ]),
      intellectual(
        "Simulacro Listening/Reading",
        &["Practice Test Parcial", "Review Mistakes"],
        "60 min",
      )
      .with_steps(vec![
        DetailedStep::new(
          "Simulacro Parcial",
          &[
            "Realizar 1 sección completa de Reading (36 min)",
            "Realizar 1 sección completa de Listening",
          ],
        ),
        DetailedStep::new(
          "Review",
          &["Analizar cada respuesta incorrecta", "Anotar vocabulario desconocido"],
        ),
      ]),
    ),
    // Monday: skill & recovery
    day(
      physical(
        "Skill & Recovery",
        &["Handstand Holds", "Hollow Body", "Mobility"],
        "45 min",
        TaskType::Calisthenics,
      )
      .with_steps(vec![
        DetailedStep::new(
          "Movilidad (Warmup)",
          &["10 min: Muñecas y Hombros", "Usa bandas elásticas"],
        ),
        DetailedStep::new(
          "Handstand Wall Holds",
          &["5 series x 30-60s", "Descanso 2 min entre series"],
        )
        .with_note("Enfoque en línea recta, no banana."),
        DetailedStep::new(
          "Core Stability",
          &["Hollow Body Hold: 4 x 45s", "Superman Hold: 4 x 45s"],
        ),
        DetailedStep::new("Cooldown", &["Estiramientos estáticos suaves"])
          .with_note("No llegar al fallo muscular. Prioridad: Salud articular."),
      ]),
      intellectual(
        "Listening BBC + Vocab",
        &["6 Minute English BBC", "Anki Deck"],
        "45 min",
      )
      .with_steps(vec![
        DetailedStep::new(
          "Active Listening",
          &[
            "Escuchar '6 Minute English' sin subtítulos",
            "Escuchar segunda vez con transcripción",
          ],
        ),
        DetailedStep::new(
          "Vocabulary Extraction",
          &[
            "Extraer 5 palabras nuevas",
            "Crear flashcards en Anki con oraciones de ejemplo",
          ],
        ),
      ]),
    ),
    // Tuesday: running quality day
    day(
      physical(
        "Run: FARTLEK 30",
        &["Warmup", "15 cycles (1 Fast / 1 Slow)", "Cooldown"],
        "50 min",
        TaskType::Running,
      )
      .with_steps(vec![
        DetailedStep::new(
          "Warmup",
          &["10 min trote suave", "Movilidad dinámica de cadera y tobillos"],
        ),
        DetailedStep::new(
          "Main Set: FARTLEK",
          &[
            "30 MIN TOTAL",
            "15 ciclos de:",
            "-> 1 min Rápido @4:30/km (Zona 4)",
            "-> 1 min Suave (Recuperación)",
          ],
        ),
        DetailedStep::new("Cooldown", &["10 min caminata para bajar pulsaciones"]).with_note(
          "El minuto rápido debe ser incómodo. No pares, trota suave en el descanso.",
        ),
      ]),
      intellectual("Active Listening", &["Podcast transcription exercise"], "30 min"),
    ),
    // Wednesday: active recovery
    day(
      physical(
        "Active Recovery",
        &["Foam Rolling", "Yoga for Runners"],
        "30 min",
        TaskType::Rest,
      ),
      intellectual(
        "Reading: Artículos",
        &["Leer 2 artículos de The Guardian/NYT", "Resumen escrito"],
        "45 min",
      )
      .with_steps(vec![
        DetailedStep::new(
          "Reading Practice",
          &[
            "Leer 1 artículo de Opinión (The Guardian)",
            "Leer 1 artículo de Ciencia (NYT/NatGeo)",
          ],
        ),
        DetailedStep::new(
          "Synthesis",
          &[
            "Escribir un resumen de 5 líneas para cada uno",
            "Identificar la tesis del autor",
          ],
        ),
      ]),
    ),
    // Thursday: core & grip
    day(
      physical(
        "Core & Grip (Cali)",
        &["Toes-to-bar", "Farmer Walks", "L-Sit", "Forearms"],
        "40 min",
        TaskType::Powerlifting,
      )
      .with_steps(vec![
        DetailedStep::new(
          "1. Hanging Leg Raises",
          &["4 series x 8-12 reps", "Pies tocan la barra", "Controlando la bajada (negativa)"],
        ),
        DetailedStep::new(
          "2. Farmer Walks",
          &["4 series x 40 metros", "Usa las mancuernas más pesadas posibles"],
        )
        .with_note("Mantener postura erguida."),
        DetailedStep::new(
          "3. L-Sit Progression",
          &["4 series x Fallo técnico (aprox 10-20s)", "En suelo o paralelas"],
        ),
        DetailedStep::new("4. Antebrazos", &["Wrist Rollers o Cubo de Arroz", "3 series x 1 min"])
          .with_note("El agarre es fundamental para el Front Lever."),
      ]),
      intellectual(
        "Grammar: Conjunctions",
        &["Coordinating Conjunctions Video", "Sentence Building"],
        "45 min",
      )
      .with_steps(vec![
        DetailedStep::new(
          "Concept Study",
          &[
            "Ver video sobre 'Coordinating Conjunctions' (FANBOYS)",
            "Tomar notas sobre puntuación",
          ],
        ),
        DetailedStep::new(
          "Application",
          &[
            "Escribir 5 oraciones complejas usando 'However'",
            "Escribir 5 oraciones usando 'Therefore'",
            "Escribir 5 oraciones usando 'Furthermore'",
          ],
        ),
      ]),
    ),
    // Friday: leg day
    day(
      physical(
        "LEG DAY: Fuerza/Hipertrofia",
        &["Back Squat", "RDL", "Leg Press", "Calves"],
        "75 min",
        TaskType::Powerlifting,
      )
      .with_steps(vec![
        DetailedStep::new(
          "1. Back Squat",
          &["4 series x 6-8 reps (RIR 2)", "Meta: Subir cargas progresivas cada semana"],
        )
        .with_note("Descansos largos (3-4 min)."),
        DetailedStep::new(
          "2. Peso Muerto Rumano",
          &["3 series x 8-10 reps", "Controlar 3 segundos la bajada"],
        ),
        DetailedStep::new("3. Prensa de Piernas", &["3 series x 12 reps", "Enfoque en cuádriceps"]),
        DetailedStep::new(
          "4. Elevación Talones",
          &["4 series x 15 reps", "Pausa en la contracción máxima"],
        ),
      ]),
      intellectual("Repaso Ligero", &["Review weekly vocabulary"], "20 min"),
    ),
    // Saturday: pull + run
    day(
      physical(
        "PULL + RUN",
        &["Front Lever", "Weighted Pullups", "Rows", "Run Zone 2"],
        "120 min",
        TaskType::Hybrid,
      )
      .with_steps(vec![
        DetailedStep::new(
          "1. Front Lever Holds",
          &["5 series x 5-10s", "Usa tu progresión actual (Adv Tuck/Straddle)"],
        ),
        DetailedStep::new("2. Dominadas Lastradas", &["4 series x 5 reps", "Explosivas al subir"]),
        DetailedStep::new(
          "3. Remos en Anillas",
          &["3 series x 10 reps", "Cuerpo horizontal (Front Lever Rows)"],
        ),
        DetailedStep::new("4. Curl Martillo", &["3 series x 12 reps"]),
        DetailedStep::new(
          "--- RUNNING (Post-Weights) ---",
          &["45-60 min Trote Suave", "Zona 2 (Ritmo Conversacional)"],
        )
        .with_note("Entrenamiento de resistencia a la fatiga."),
      ]),
      intellectual(
        "Writing: Copy",
        &["Copywork de ensayos modelo", "Analizar estructura"],
        "40 min",
      )
      .with_steps(vec![
        DetailedStep::new(
          "Copywork",
          &["Copiar a mano un ensayo TOEFL de puntaje perfecto (30/30)"],
        ),
        DetailedStep::new(
          "Analysis",
          &[
            "Subrayar las oraciones temáticas (Topic Sentences)",
            "Circular los conectores usados",
          ],
        ),
      ]),
    ),
  ]
}

/// ---------------------------------------------------------------------------
/// Phase 2: Peak Performance (Apr - Jun)
/// ---------------------------------------------------------------------------

fn peak_performance_schedule() -> [ScheduleDay; 7] {
  [
    day(
      physical(
        "PUSH Power",
        &["Straddle Negatives", "Planche Leans Max Effort"],
        "75 min",
        TaskType::Calisthenics,
      ),
      intellectual("Simulacro EXAMEN COMPLETO", &["Full TOEFL Test Simulation"], "3 Hours"),
    ),
    day(
      rest_physical(),
      intellectual(
        "Listening: TED Talks",
        &["Note taking practice", "Summary speaking"],
        "45 min",
      ),
    ),
    day(
      physical(
        "Run: Series Velocidad",
        &["Warmup", "6x1km @ 5:00/km pace", "Cool down"],
        "60 min",
        TaskType::Running,
      ),
      intellectual("Speaking Q1 & Q2", &["Record responses", "Self-correction"], "40 min"),
    ),
    day(
      physical(
        "Mobility Flow",
        &["Hip openers for Squat", "Shoulder mobility"],
        "30 min",
        TaskType::Rest,
      ),
      intellectual(
        "Reading Académico",
        &["TOEFL Reading Section Practice", "Time management drills"],
        "50 min",
      ),
    ),
    day(
      rest_physical(),
      intellectual(
        "Writing Templates",
        &["Independent Task Templates", "Integrated Task Practice"],
        "45 min",
      ),
    ),
    day(
      physical(
        "LEG DAY: Strength",
        &["Squat 5x5 (80-85%)", "Hip Thrust 3x8"],
        "70 min",
        TaskType::Powerlifting,
      ),
      rest_intellectual(),
    ),
    day(
      physical(
        "PULL + Long Run",
        &["Straddle Attempts", "Run: 14-18km Endurance"],
        "150 min",
        TaskType::Hybrid,
      ),
      intellectual("Speaking Integrado", &["Listen/Read/Speak drills"], "45 min"),
    ),
  ]
}

/// ---------------------------------------------------------------------------
/// Phase 3: Max Strength (Jul - Dec)
/// ---------------------------------------------------------------------------

fn max_strength_schedule() -> [ScheduleDay; 7] {
  [
    day(
      physical(
        "PUSH: Planche Quest",
        &["Full Planche Attempts", "Zanetti Press", "Handstand Pushups"],
        "90 min",
        TaskType::Calisthenics,
      ),
      rest_intellectual(),
    ),
    day(rest_physical(), rest_intellectual()),
    day(
      physical("Run: Maintenance", &["5km Easy Pace", "Strides"], "30 min", TaskType::Running),
      intellectual("English Maint.", &["Consume English Media"], "20 min"),
    ),
    day(rest_physical(), rest_intellectual()),
    day(
      physical(
        "Accessory Work",
        &["Rotator Cuff", "Core", "Calves"],
        "45 min",
        TaskType::Powerlifting,
      ),
      rest_intellectual(),
    ),
    day(
      physical(
        "LEG DAY: 5/3/1 Wendler",
        &["Main Lift: Squat (Cycle)", "Accessories: Leg Press, Extension"],
        "60 min",
        TaskType::Powerlifting,
      ),
      rest_intellectual(),
    ),
    day(
      physical(
        "PULL: Front Lever",
        &["Full Front Lever Holds", "One Arm Pullup progressions"],
        "90 min",
        TaskType::Calisthenics,
      ),
      rest_intellectual(),
    ),
  ]
}

pub(super) fn phases() -> Vec<Phase> {
  vec![
    Phase {
      id: 1,
      name: "Fase 1: Base Building".to_string(),
      description: "Construcción de base aeróbica, hipertrofia y vocabulario.".to_string(),
      start_date: ymd(2025, 12, 1),
      end_date: ymd(2026, 3, 31),
      schedule: base_building_schedule(),
      focus: "Volumen & Vocabulario".to_string(),
    },
    Phase {
      id: 2,
      name: "Fase 2: Peak Performance".to_string(),
      description: "Velocidad específica, fuerza y preparación intensiva TOEFL.".to_string(),
      start_date: ymd(2026, 4, 1),
      end_date: ymd(2026, 6, 30),
      schedule: peak_performance_schedule(),
      focus: "Intensidad & Speaking".to_string(),
    },
    Phase {
      id: 3,
      name: "Fase 3: Max Strength".to_string(),
      description: "Fuerza máxima (1RM) y habilidades estáticas avanzadas.".to_string(),
      start_date: ymd(2026, 7, 1),
      end_date: ymd(2026, 12, 31),
      schedule: max_strength_schedule(),
      focus: "Fuerza Bruta & Skill".to_string(),
    },
  ]
}

/// ---------------------------------------------------------------------------
/// Goals
/// ---------------------------------------------------------------------------

struct GoalSeed {
  id: &'static str,
  title: &'static str,
  target: &'static str,
  deadline: &'static str,
  category: GoalCategory,
  icon: GoalIcon,
  status: &'static str,
  progress: u8,
  values: Option<(f64, f64, &'static str)>,
  window: ((i32, u32, u32), (i32, u32, u32)),
  maintenance: bool,
}

const YEAR: ((i32, u32, u32), (i32, u32, u32)) = ((2025, 12, 1), (2026, 12, 31));
const FIRST_HALF: ((i32, u32, u32), (i32, u32, u32)) = ((2025, 12, 1), (2026, 6, 30));

const GOAL_SEEDS: [GoalSeed; 5] = [
  GoalSeed {
    id: "1",
    title: "Front Lever",
    target: "Maintain Perfect Form",
    deadline: "Continuous",
    category: GoalCategory::Physical,
    icon: GoalIcon::Activity,
    status: "Logrado",
    progress: 100,
    values: None,
    window: YEAR,
    maintenance: true,
  },
  GoalSeed {
    id: "2",
    title: "Full Planche",
    target: "10 Seconds Hold",
    deadline: "Dec 2026",
    category: GoalCategory::Physical,
    icon: GoalIcon::Dumbbell,
    status: "Straddle progress",
    progress: 20,
    values: None,
    window: YEAR,
    maintenance: false,
  },
  GoalSeed {
    id: "3",
    title: "Back Squat",
    target: "150kg 1RM",
    deadline: "Dec 2026",
    category: GoalCategory::Physical,
    icon: GoalIcon::Dumbbell,
    status: "105kg",
    progress: 0,
    values: Some((105.0, 150.0, "kg")),
    window: YEAR,
    maintenance: false,
  },
  GoalSeed {
    id: "4",
    title: "Media Maratón",
    target: "Ritmo 5:00/km",
    deadline: "Jun 2026",
    category: GoalCategory::Physical,
    icon: GoalIcon::Wind,
    status: "Base building",
    progress: 10,
    values: None,
    window: FIRST_HALF,
    maintenance: false,
  },
  GoalSeed {
    id: "5",
    title: "TOEFL iBT",
    target: "Score 90/120",
    deadline: "Jun 2026",
    category: GoalCategory::Intellectual,
    icon: GoalIcon::BookOpen,
    status: "Studying",
    progress: 20,
    values: Some((60.0, 90.0, "pts")),
    window: FIRST_HALF,
    maintenance: false,
  },
];

/// Id of the back squat goal, shown as the estimated 1RM headline
pub const SQUAT_GOAL_ID: &str = "3";
/// Id of the TOEFL goal, shown as the estimated score headline
pub const TOEFL_GOAL_ID: &str = "5";

pub(super) fn goals() -> Vec<GoalDefinition> {
  GOAL_SEEDS
    .iter()
    .map(|seed| {
      let ((sy, sm, sd), (dy, dm, dd)) = seed.window;
      GoalDefinition {
        id: seed.id.to_string(),
        title: seed.title.to_string(),
        target: seed.target.to_string(),
        deadline: seed.deadline.to_string(),
        category: seed.category,
        icon: seed.icon,
        current_status: seed.status.to_string(),
        progress: seed.progress,
        start_value: seed.values.map(|(from, _, _)| from),
        target_value: seed.values.map(|(_, to, _)| to),
        unit: seed.values.map(|(_, _, unit)| unit.to_string()),
        start_date: Some(ymd(sy, sm, sd)),
        deadline_date: Some(ymd(dy, dm, dd)),
        maintenance: seed.maintenance,
      }
    })
    .collect()
}
