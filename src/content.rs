//! Static curriculum content for the seven-year "Applied Cogency" plan.
//!
//! Entries carry no dates. Each one names the slot it occupies (a quarter,
//! a half-year, or a full year of the plan) and the builder in `plan`
//! resolves slots to concrete date ranges. Two layouts of the same content
//! exist; they differ only in how the Year 5 consolidation themes are
//! bucketed, so the layout is selected by variant name rather than
//! hardcoded.

/// Which stretch of its plan year an entry occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Quarter 1-4 of the year.
    Quarter(u8),
    /// Half 1-2 of the year.
    Half(u8),
    /// The whole year. Several entries may share one year as parallel
    /// tracks.
    Year,
}

#[derive(Debug, Clone, Copy)]
pub struct ContentEntry {
    pub year: u8,
    pub slot: Slot,
    pub theme: &'static str,
    pub tasks: &'static [&'static str],
    pub resources: &'static [&'static str],
    pub why: &'static str,
}

#[derive(Debug, Clone)]
pub struct ContentTable {
    pub name: &'static str,
    pub entries: Vec<ContentEntry>,
}

pub const VARIANT_CLASSIC: &str = "classic";
pub const VARIANT_CONSOLIDATED: &str = "consolidated";

pub const DEFAULT_VARIANT: &str = VARIANT_CLASSIC;

/// Resolve a variant name to its content table. Unknown names yield `None`
/// so callers can report a bad parameter instead of guessing.
pub fn content_table(variant: &str) -> Option<ContentTable> {
    match variant {
        VARIANT_CLASSIC => Some(ContentTable {
            name: VARIANT_CLASSIC,
            entries: [CORE_YEARS_1_TO_4, YEAR_5_TRACKS, YEARS_6_AND_7].concat(),
        }),
        VARIANT_CONSOLIDATED => Some(ContentTable {
            name: VARIANT_CONSOLIDATED,
            entries: [CORE_YEARS_1_TO_4, YEAR_5_COMBINED, YEARS_6_AND_7].concat(),
        }),
        _ => None,
    }
}

pub fn default_table() -> ContentTable {
    // DEFAULT_VARIANT is a known name.
    content_table(DEFAULT_VARIANT).unwrap_or(ContentTable {
        name: DEFAULT_VARIANT,
        entries: Vec::new(),
    })
}

/// Years 1-3 run quarterly; Year 4 expresses each quadrant as a parallel
/// year-long track. Shared by both variants.
const CORE_YEARS_1_TO_4: &[ContentEntry] = &[
    ContentEntry {
        year: 1,
        slot: Slot::Quarter(1),
        theme: "Authentic Resonance",
        tasks: &[
            "Read SEP/IEP entries",
            "Watch Jung Platform lectures",
            "Read “Memories, Dreams, Reflections”",
            "Maintain dream journal daily",
            "Write 12 typed summaries",
            "Write 4 active‑imagination transcripts",
        ],
        resources: &[
            "SEP/IEP entries",
            "Jung Platform",
            "Memories, Dreams, Reflections",
        ],
        why: "Establish personal resonance and self‑awareness.",
    },
    ContentEntry {
        year: 1,
        slot: Slot::Quarter(2),
        theme: "Moral Truth",
        tasks: &[
            "Read the Gospel of John",
            "Read Romans 1–12",
            "Read Athanasius “On the Incarnation”",
            "Read Augustine Books VIII & XIX",
            "Read Aquinas Summa Theologiae I (selected)",
            "Write 12 moral case briefs",
            "Complete at least 20 service hours",
        ],
        resources: &[
            "Gospel of John",
            "Romans 1–12",
            "Athanasius “On the Incarnation”",
            "Augustine “City of God” Books VIII & XIX",
            "Aquinas Summa Theologiae I",
        ],
        why: "Ground moral understanding in classical texts.",
    },
    ContentEntry {
        year: 1,
        slot: Slot::Quarter(3),
        theme: "Aesthetic Truth",
        tasks: &[
            "Read Plato “Symposium” and “Philebus”",
            "Read Plotinus “Enneads I.6 – On Beauty”",
            "Read Aquinas ST I Q5 & Q39",
            "Read Kant “Critique of Judgment” §§1–22",
            "Create 12 object sketches",
            "Conduct 4 museum studies",
        ],
        resources: &[
            "Plato (Symposium, Philebus)",
            "Plotinus Enneads I.6",
            "Aquinas ST I Q5/Q39",
            "Kant “Critique of Judgment” §§1–22",
        ],
        why: "Explore beauty and form.",
    },
    ContentEntry {
        year: 1,
        slot: Slot::Quarter(4),
        theme: "Semantic Truth",
        tasks: &[
            "Read Bertalanffy “General System Theory” excerpts",
            "Read Wiener “Cybernetics” chapters 1–3",
            "Read Bateson essays",
            "Read Heinz von Foerster essays",
            "Build 2 small data models",
            "Create 1 interface wireframe",
        ],
        resources: &[
            "Bertalanffy excerpts",
            "Wiener ch.1–3",
            "Bateson essays",
            "Foerster essays",
        ],
        why: "Introduce systems thinking.",
    },
    ContentEntry {
        year: 2,
        slot: Slot::Quarter(1),
        theme: "Operation – Typology",
        tasks: &[
            "Read Jung’s “Psychological Types” Chapters I–XI",
            "Create 8‑function map (self + 3 interlocutors)",
            "Perform weekly dream‑type correlation",
            "Study John Beebe selections",
            "Study Marie‑Louise von Franz selections",
        ],
        resources: &[
            "Jung “Psychological Types”",
            "Beebe “Energies and Patterns in Psychological Type”",
            "von Franz “Psychological Types and the Individuation Process”",
        ],
        why: "Operationalise psychological functions.",
    },
    ContentEntry {
        year: 2,
        slot: Slot::Quarter(2),
        theme: "Operation – Virtue Ethics",
        tasks: &[
            "Read Aristotle “Nicomachean Ethics” Books I–II",
            "Read Aristotle “Nicomachean Ethics” Books III–V",
            "Read Aristotle “Nicomachean Ethics” Book X",
            "Read Aquinas Summa Theologiae I–II Q55–70",
            "Implement habit protocol: choose 2 virtues, micro‑drills, weekly examen",
            "Write 8 dilemma write‑ups",
        ],
        resources: &[
            "Aristotle Nicomachean Ethics",
            "Aquinas Summa Theologiae I–II Q55–70",
        ],
        why: "Habituate virtues.",
    },
    ContentEntry {
        year: 2,
        slot: Slot::Quarter(3),
        theme: "Operation – Aesthetics",
        tasks: &[
            "Read Kant “Critique of Judgment” §§30–60",
            "Read John Ruskin “The Seven Lamps of Architecture” (selected)",
            "Read SEP entry “Aesthetic Judgment”",
            "Write 4 formal critiques",
            "Perform typographic drills: spacing & grids",
            "Create 1 poster system",
        ],
        resources: &[
            "Kant §§30–60",
            "Ruskin “The Seven Lamps of Architecture”",
            "SEP “Aesthetic Judgment”",
        ],
        why: "Refine aesthetic judgment.",
    },
    ContentEntry {
        year: 2,
        slot: Slot::Quarter(4),
        theme: "Operation – Cybernetics",
        tasks: &[
            "Read Wiener “Cybernetics” Chapters 4–8",
            "Read Ross Ashby “An Introduction to Cybernetics”",
            "Read Claude Shannon “A Mathematical Theory of Communication”",
            "Watch Stafford Beer lectures",
            "Build 1 feedback loop in code",
            "Run 2 usability tests",
        ],
        resources: &[
            "Wiener ch.4–8",
            "Ashby “Introduction to Cybernetics”",
            "Shannon “A Mathematical Theory of Communication”",
            "Stafford Beer lectures",
        ],
        why: "Implement cybernetic feedback.",
    },
    ContentEntry {
        year: 3,
        slot: Slot::Quarter(1),
        theme: "Mechanism – Socionics",
        tasks: &[
            "Study Aushra Augusta’s papers",
            "Study Victor Gulenko’s writings",
            "Study Socionics Model A",
            "Study intertype relations",
            "Conduct type‑interviews with 10 people",
            "Write 20‑page synthesis",
        ],
        resources: &[
            "Augusta & Gulenko works",
            "Socionics Model A",
            "Intertype relations",
        ],
        why: "Mechanise typological models.",
    },
    ContentEntry {
        year: 3,
        slot: Slot::Quarter(2),
        theme: "Mechanism – Applied Ethics",
        tasks: &[
            "Study Markkula Center frameworks for ethical decision making",
            "Read SEP domain entries on applied ethics",
            "Watch Michael Sandel’s Justice lectures",
            "Write 6 case memos across bio, war, tech, env, business and privacy",
        ],
        resources: &[
            "Markkula Center frameworks",
            "SEP applied ethics entries",
            "Sandel “Justice” lectures",
        ],
        why: "Apply ethical techniques.",
    },
    ContentEntry {
        year: 3,
        slot: Slot::Quarter(3),
        theme: "Mechanism – Typography/Design",
        tasks: &[
            "Read Josef Müller‑Brockmann “Grid Systems in Graphic Design”",
            "Read Jan Tschichold “The Form of the Book”",
            "Read Ellen Lupton “Thinking with Type”",
            "Build grid library",
            "Develop type scale",
            "Publish 12‑page booklet",
        ],
        resources: &[
            "Müller‑Brockmann “Grid Systems in Graphic Design”",
            "Tschichold “The Form of the Book”",
            "Lupton “Thinking with Type”",
        ],
        why: "Craft design mechanisms.",
    },
    ContentEntry {
        year: 3,
        slot: Slot::Quarter(4),
        theme: "Mechanism – UX/Information Architecture",
        tasks: &[
            "Read Garrett “The Elements of User Experience” (abridged)",
            "Study Nielsen Norman Group guides",
            "Read Steve Krug “Don’t Make Me Think”",
            "Read Don Norman “The Design of Everyday Things” (revised)",
            "Conduct research study with ≥8 participants",
            "Conduct card‑sort",
            "Build information architecture tree",
            "Create interactive prototype",
        ],
        resources: &[
            "Garrett “The Elements of User Experience”",
            "Nielsen Norman Group guides",
            "Krug “Don’t Make Me Think”",
            "Norman “The Design of Everyday Things”",
        ],
        why: "Build UX mechanisms.",
    },
    ContentEntry {
        year: 4,
        slot: Slot::Year,
        theme: "Typological Practice",
        tasks: &[
            "Offer 10 pro‑bono sessions",
            "Record consented notes",
            "Record outcome measures",
            "Maintain counter‑transference log",
        ],
        resources: &[],
        why: "Express typology in practice.",
    },
    ContentEntry {
        year: 4,
        slot: Slot::Year,
        theme: "Governance Survey",
        tasks: &[
            "Read Plato",
            "Read the Federalist Papers",
            "Read the Universal Declaration of Human Rights",
            "Write three 1 200‑word policy briefs with virtue‑analysis rubric",
            "Run 2 dialogue circles",
        ],
        resources: &["Plato", "The Federalist Papers", "UDHR"],
        why: "Express moral governance.",
    },
    ContentEntry {
        year: 4,
        slot: Slot::Year,
        theme: "Designed Artifact",
        tasks: &[
            "Build a small type system (PDF + web)",
            "Gather open critique",
            "Release version 2 with revisions",
            "Document rationale",
        ],
        resources: &[],
        why: "Express aesthetic design.",
    },
    ContentEntry {
        year: 4,
        slot: Slot::Year,
        theme: "Interface/Comms System",
        tasks: &[
            "Release a v1 productised tool (docs + onboarding)",
            "Collect telemetry",
            "Iterate twice",
        ],
        resources: &[],
        why: "Express semantic systems.",
    },
];

/// Classic layout: Year 5 as four parallel year-long consolidation tracks.
const YEAR_5_TRACKS: &[ContentEntry] = &[
    ContentEntry {
        year: 5,
        slot: Slot::Year,
        theme: "Archetypal Deepening",
        tasks: &[
            "Read CW9i “Archetypes and the Collective Unconscious”",
            "Sample “Mysterium Coniunctionis”",
            "Read von Franz or Hillman",
            "Conduct 2 symbol studies with amplification",
        ],
        resources: &[
            "CW9i “Archetypes”",
            "Mysterium Coniunctionis",
            "von Franz/Hillman",
        ],
        why: "Deepen archetypal understanding.",
    },
    ContentEntry {
        year: 5,
        slot: Slot::Year,
        theme: "Moral Depth",
        tasks: &[
            "Read Aquinas I–II Q90–97",
            "Read O’Donovan “Resurrection & Moral Order” or Ratzinger “Introduction to Christianity”",
            "Write 1 moral ontology essay",
        ],
        resources: &[
            "Aquinas I–II Q90–97",
            "O’Donovan “Resurrection & Moral Order”",
            "Ratzinger “Introduction to Christianity”",
        ],
        why: "Consolidate moral depth.",
    },
    ContentEntry {
        year: 5,
        slot: Slot::Year,
        theme: "Aesthetic Depth",
        tasks: &[
            "Read Balthasar Volume I or Gilson",
            "Read a Heidegger essay",
            "Write 1 curatorial essay aligning beauty/being",
            "Produce photo series as accompaniment",
        ],
        resources: &["Balthasar Volume I", "Gilson", "Heidegger essay"],
        why: "Deepen aesthetic philosophy.",
    },
    ContentEntry {
        year: 5,
        slot: Slot::Year,
        theme: "Information Architecture Consolidation",
        tasks: &[
            "Read Rosenfeld/Morville & Arango",
            "Read Cooper",
            "Read Young",
            "Ship an information architecture for a real domain",
            "Run 1 longitudinal study (n ≥ 12, 6 weeks)",
        ],
        resources: &["Rosenfeld/Morville & Arango", "Cooper", "Young"],
        why: "Consolidate information architecture.",
    },
];

/// Consolidated layout: the same Year 5 themes folded into one block.
const YEAR_5_COMBINED: &[ContentEntry] = &[ContentEntry {
    year: 5,
    slot: Slot::Year,
    theme: "Consolidation",
    tasks: &[
        "Read CW9i “Archetypes and the Collective Unconscious”",
        "Sample “Mysterium Coniunctionis”",
        "Read von Franz or Hillman",
        "Conduct 2 symbol studies with amplification",
        "Read Aquinas I–II Q90–97",
        "Read O’Donovan “Resurrection & Moral Order” or Ratzinger “Introduction to Christianity”",
        "Write 1 moral ontology essay",
        "Read Balthasar Volume I or Gilson",
        "Read a Heidegger essay",
        "Write 1 curatorial essay aligning beauty/being",
        "Produce photo series as accompaniment",
        "Read Rosenfeld/Morville & Arango",
        "Read Cooper",
        "Read Young",
        "Ship an information architecture for a real domain",
        "Run 1 longitudinal study (n ≥ 12, 6 weeks)",
    ],
    resources: &[
        "CW9i “Archetypes”",
        "Mysterium Coniunctionis",
        "von Franz/Hillman",
        "Aquinas I–II Q90–97",
        "O’Donovan “Resurrection & Moral Order”",
        "Ratzinger “Introduction to Christianity”",
        "Balthasar Volume I",
        "Gilson",
        "Heidegger essay",
        "Rosenfeld/Morville & Arango",
        "Cooper",
        "Young",
    ],
    why: "Consolidate all four quadrants in one block.",
}];

const YEARS_6_AND_7: &[ContentEntry] = &[
    ContentEntry {
        year: 6,
        slot: Slot::Half(1),
        theme: "Authority & Symbol",
        tasks: &[
            "Study CW14 passages",
            "Study constitutional design",
            "Write a 25‑page white paper",
            "Host a seminar with peers",
        ],
        resources: &["CW14 passages", "Constitutional design references"],
        why: "Synthesise authority across quadrants.",
    },
    ContentEntry {
        year: 6,
        slot: Slot::Half(2),
        theme: "Form & Justice",
        tasks: &[
            "Pair type/space decisions with procedural fairness",
            "Create a digital artifact",
            "Conduct an ethical audit",
        ],
        resources: &[
            "References on procedural fairness",
            "Type and space design references",
        ],
        why: "Synthesise form and justice.",
    },
    ContentEntry {
        year: 7,
        slot: Slot::Year,
        theme: "Transmission",
        tasks: &[
            "Teach a short course per quadrant (4 × 90 min)",
            "Publish notes and templates",
            "Compile a methods handbook (typology intake, virtue drill sheets, design grids, IA checklists)",
            "Release versioned methods handbook",
        ],
        resources: &[],
        why: "Transmit knowledge and codify methods.",
    },
];
