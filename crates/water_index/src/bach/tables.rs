//! Sub-score lookup tables of the BACH index.
//!
//! The tables follow the published BACH scoring curves point for point.
//! Four entries were transcribed with a comma in place of a decimal point
//! and became 3-tuples. They are kept as they are evaluated, using the first
//! two numbers as `(x, y)`, and listed in [`TABLE_ANOMALIES`]. Correcting them
//! changes pH, BOD5 and ammonium sub-scores and needs sign-off from a domain
//! expert first.

use crate::interpolation::LookupTable;

pub static TEMPERATURE: LookupTable = LookupTable::new(
    "temp",
    &[
        (14.0, 100.0),
        (14.5, 99.5),
        (15.0, 99.0),
        (15.5, 98.25),
        (16.0, 97.5),
        (16.5, 96.25),
        (17.0, 95.0),
        (17.5, 92.5),
        (18.0, 90.0),
        (18.5, 84.5),
        (19.0, 79.0),
        (19.5, 73.25),
        (20.0, 67.5),
        (20.5, 61.75),
        (21.0, 56.0),
        (21.5, 52.5),
        (22.0, 45.0),
        (22.5, 39.25),
        (23.0, 33.5),
        (23.5, 27.75),
        (24.0, 22.0),
        (24.5, 18.5),
        (25.0, 15.0),
        (25.5, 12.0),
        (26.0, 9.0),
        (26.5, 7.25),
        (27.0, 5.5),
        (27.5, 4.25),
        (28.0, 3.0),
        (28.5, 2.25),
        (29.0, 1.5),
        (29.5, 1.25),
        (30.0, 1.0),
    ],
);

pub static OXYGEN_SATURATION: LookupTable = LookupTable::new(
    "o2",
    &[
        (0.0, 2.0),
        (5.0, 2.5),
        (10.0, 3.0),
        (15.0, 4.5),
        (20.0, 6.0),
        (25.0, 9.0),
        (30.0, 12.0),
        (35.0, 15.0),
        (40.0, 19.0),
        (45.0, 24.0),
        (50.0, 30.0),
        (55.0, 36.0),
        (60.0, 43.0),
        (65.0, 53.0),
        (70.0, 63.0),
        (75.0, 71.0),
        (80.0, 79.0),
        (85.0, 86.0),
        (90.0, 93.0),
        (95.0, 99.0),
        (96.0, 100.0),
        (100.0, 100.0),
        (105.0, 100.0),
        (106.0, 100.0),
        (110.0, 97.0),
        (115.0, 95.0),
        (120.0, 90.5),
        (125.0, 87.0),
        (130.0, 83.0),
    ],
);

pub static BOD5: LookupTable = LookupTable::new(
    "bsb5",
    &[
        (0.0, 100.0),
        // (0, 5, 99.5)
        (0.0, 5.0),
        (1.0, 98.0),
        (1.5, 95.0),
        (2.0, 90.0),
        (2.5, 84.0),
        (3.0, 76.0),
        (3.5, 68.0),
        (4.0, 61.0),
        (4.5, 54.0),
        (5.0, 48.0),
        (5.5, 42.0),
        (6.0, 37.0),
        (7.0, 28.0),
        (8.0, 20.5),
        (9.0, 14.5),
        (10.0, 10.0),
        (15.0, 4.0),
    ],
);

pub static PH: LookupTable = LookupTable::new(
    "ph",
    &[
        (3.0, 1.0),
        (3.5, 2.5),
        (4.0, 7.0),
        (4.5, 13.0),
        (5.0, 22.0),
        (5.5, 34.5),
        (6.0, 56.5),
        (6.5, 78.5),
        // (6, 6, 83)
        (6.0, 6.0),
        (6.7, 87.5),
        (6.8, 92.0),
        (6.9, 96.0),
        // (7, 98, 5)
        (7.0, 98.0),
        (7.1, 99.5),
        (7.2, 100.0),
        (7.3, 100.0),
        (7.4, 99.5),
        (7.5, 98.5),
        (7.6, 96.0),
        (7.7, 92.0),
        (7.8, 87.5),
        (7.9, 83.5),
        (8.0, 78.5),
        (8.5, 55.5),
        (9.0, 33.0),
        (9.5, 18.0),
        (10.0, 10.5),
    ],
);

pub static NITRATE: LookupTable = LookupTable::new(
    "no3",
    &[
        (0.0, 100.0),
        (2.0, 94.0),
        (4.0, 88.0),
        (6.0, 82.0),
        (8.0, 76.0),
        (10.0, 70.5),
        (12.0, 64.5),
        (14.0, 58.5),
        (16.0, 52.5),
        (18.0, 46.5),
        (20.0, 40.5),
        (22.0, 35.5),
        (24.0, 30.0),
        (26.0, 26.0),
        (28.0, 23.0),
        (30.0, 20.0),
        (36.0, 15.0),
        (40.0, 10.0),
    ],
);

pub static PHOSPHATE: LookupTable = LookupTable::new(
    "po4",
    &[
        (0.0, 100.0),
        (0.1, 95.0),
        (0.2, 84.0),
        (0.3, 72.0),
        (0.4, 60.0),
        (0.5, 48.0),
        (0.6, 39.0),
        (0.7, 31.5),
        (0.8, 25.0),
        (0.9, 20.0),
        (1.0, 16.0),
        (1.1, 12.5),
        (1.2, 10.0),
        (1.3, 8.0),
        (1.4, 7.0),
        (1.5, 6.0),
        (1.6, 5.5),
        (1.8, 5.0),
        (2.0, 5.0),
        (2.5, 4.0),
        (3.0, 3.0),
        (4.0, 2.0),
        (5.0, 1.0),
    ],
);

pub static AMMONIUM: LookupTable = LookupTable::new(
    "nh4",
    &[
        (0.0, 100.0),
        // (0, 2, 84)
        (0.0, 2.0),
        (0.4, 60.0),
        (0.6, 49.0),
        (0.8, 40.0),
        (1.0, 35.0),
        (1.2, 31.0),
        (1.4, 28.5),
        (1.6, 26.5),
        (1.8, 24.5),
        (2.0, 23.0),
        (2.5, 20.0),
        (3.0, 18.0),
        (4.0, 15.5),
        (5.0, 12.0),
        (6.0, 10.0),
        (8.0, 6.5),
        (10.0, 4.5),
        (13.0, 3.5),
    ],
);

pub static CONDUCTIVITY: LookupTable = LookupTable::new(
    "conductivity",
    &[
        (0.0, 72.0),
        (25.0, 85.0),
        (50.0, 91.0),
        (75.0, 95.0),
        (100.0, 97.5),
        (125.0, 99.5),
        (150.0, 100.0),
        (175.0, 99.5),
        (200.0, 98.5),
        (225.0, 97.0),
        (250.0, 95.5),
        (275.0, 93.0),
        (300.0, 91.0),
        (350.0, 85.0),
        (400.0, 77.0),
        (450.0, 70.0),
        (500.0, 63.0),
        (550.0, 56.0),
        (600.0, 50.0),
        (700.0, 39.0),
        (800.0, 31.0),
        (900.0, 24.0),
        (1000.0, 19.0),
        (1100.0, 15.0),
        (1200.0, 13.0),
        (1300.0, 11.0),
        (1400.0, 10.0),
        (1500.0, 9.0),
        (2000.0, 8.0),
        (3000.0, 6.0),
        (4000.0, 4.0),
        (5000.0, 2.0),
    ],
);

// ---------------------------------------------------------------------------
// Anomaly register
// ---------------------------------------------------------------------------

/// A table entry that does not match the published curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableAnomaly {
    pub table: &'static str,
    /// Position in the table's `points`.
    pub index: usize,
    /// The entry as transcribed.
    pub transcribed: &'static str,
    /// The point it is evaluated as.
    pub evaluated: (f64, f64),
    /// The point it most likely stands for. Not applied.
    pub probable: (f64, f64),
}

pub static TABLE_ANOMALIES: [TableAnomaly; 4] = [
    TableAnomaly {
        table: "bsb5",
        index: 1,
        transcribed: "(0, 5, 99.5)",
        evaluated: (0.0, 5.0),
        probable: (0.5, 99.5),
    },
    TableAnomaly {
        table: "ph",
        index: 8,
        transcribed: "(6, 6, 83)",
        evaluated: (6.0, 6.0),
        probable: (6.6, 83.0),
    },
    TableAnomaly {
        table: "ph",
        index: 12,
        transcribed: "(7, 98, 5)",
        evaluated: (7.0, 98.0),
        probable: (7.0, 98.5),
    },
    TableAnomaly {
        table: "nh4",
        index: 1,
        transcribed: "(0, 2, 84)",
        evaluated: (0.0, 2.0),
        probable: (0.2, 84.0),
    },
];

/// All eight tables in weight order.
pub fn all_tables() -> [&'static LookupTable; 8] {
    [
        &TEMPERATURE,
        &OXYGEN_SATURATION,
        &BOD5,
        &PH,
        &NITRATE,
        &PHOSPHATE,
        &AMMONIUM,
        &CONDUCTIVITY,
    ]
}

/// Anomalies recorded for `table`.
pub fn anomalies_for(table: &str) -> impl Iterator<Item = &'static TableAnomaly> + '_ {
    TABLE_ANOMALIES.iter().filter(move |a| a.table == table)
}
