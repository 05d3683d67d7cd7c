//! Built-in sample data loaded by [`Store::seeded`](super::Store::seeded).

use crate::models::{
    Appointment, AppointmentStatus, InventoryItem, LabReport, Medicine, Patient, Prescription,
    ProcedurePerformed, ProcedureRecord, Template, Vitals,
};

use super::Snapshot;

fn vitals(bp: &str, hr: &str, temp: &str, spo2: &str, weight: &str) -> Vitals {
    Vitals {
        bp: bp.into(),
        hr: hr.into(),
        temp: temp.into(),
        spo2: spo2.into(),
        weight: weight.into(),
    }
}

fn medicine(
    id: &str,
    name: &str,
    strength: &str,
    frequency: &str,
    duration: &str,
    instructions: &str,
) -> Medicine {
    Medicine {
        id: id.into(),
        name: name.into(),
        strength: strength.into(),
        dosage: "Tablet".into(),
        frequency: frequency.into(),
        duration: duration.into(),
        instructions: instructions.into(),
    }
}

#[allow(clippy::too_many_arguments)]
fn patient(
    id: &str,
    name: &str,
    age: &str,
    gender: &str,
    phone: &str,
    blood: &str,
    image: &str,
    vitals: Vitals,
) -> Patient {
    Patient {
        id: id.into(),
        name: name.into(),
        age: age.into(),
        gender: gender.into(),
        phone: phone.into(),
        blood: blood.into(),
        image: Some(image.into()),
        vitals,
    }
}

fn inventory(id: &str, name: &str, strength: &str, dosage: &str, stock: u32) -> InventoryItem {
    InventoryItem {
        id: id.into(),
        name: name.into(),
        strength: strength.into(),
        dosage: dosage.into(),
        stock,
    }
}

fn appointment(id: &str, time: &str, patient_name: &str, kind: &str, reason: &str) -> Appointment {
    Appointment {
        id: id.into(),
        time: time.into(),
        patient_name: patient_name.into(),
        kind: kind.into(),
        reason: reason.into(),
        status: AppointmentStatus::Pending,
    }
}

fn procedure(
    id: &str,
    patient_id: &str,
    patient_name: &str,
    procedure_name: &str,
    date: &str,
    cost: &str,
    notes: &str,
) -> ProcedureRecord {
    ProcedureRecord {
        id: id.into(),
        patient_id: patient_id.into(),
        patient_name: patient_name.into(),
        procedure_name: procedure_name.into(),
        date: date.into(),
        cost: cost.into(),
        notes: notes.into(),
    }
}

/// The sample clinic: three patients, four stock items, two pending
/// appointments, three prescriptions, three templates, three procedures.
pub fn sample_snapshot() -> Snapshot {
    let patients = vec![
        patient(
            "1",
            "Alice Johnson",
            "29",
            "Female",
            "9876543210",
            "O+",
            "https://randomuser.me/api/portraits/women/44.jpg",
            vitals("118/75", "70", "98.4", "99", "65"),
        ),
        patient(
            "2",
            "Robert Smith",
            "54",
            "Male",
            "9123456789",
            "A-",
            "https://randomuser.me/api/portraits/men/32.jpg",
            vitals("140/90", "80", "99.1", "97", "85"),
        ),
        patient(
            "3",
            "Charlie Brown",
            "35",
            "Male",
            "9998887770",
            "B+",
            "https://randomuser.me/api/portraits/men/1.jpg",
            vitals("120/80", "75", "98.6", "98", "70"),
        ),
    ];

    let labs = vec![LabReport {
        id: "L1".into(),
        patient_id: "1".into(),
        patient_name: "Alice Johnson".into(),
        test_name: "Complete Blood Count".into(),
        date: "2023-11-15".into(),
        image: None,
        lab_note: "Hb: 14.5 g/dL (Normal)".into(),
        result: Some("Normal".into()),
    }];

    let inventory = vec![
        inventory("101", "Paracetamol", "500mg", "Tablet", 120),
        inventory("102", "Amoxicillin", "250mg/5ml", "Syrup", 4),
        inventory("103", "N95 Masks", "N/A", "Piece", 45),
        inventory("104", "Cetirizine", "10mg", "Tablet", 50),
    ];

    let appointments = vec![
        appointment(
            "a1",
            "Mon Dec 15 2025 | 09:00 AM",
            "Alice Johnson",
            "Routine Checkup",
            "Headache",
        ),
        appointment(
            "a2",
            "Mon Dec 15 2025 | 10:30 AM",
            "Charlie Brown",
            "Follow Up",
            "Review blood work",
        ),
    ];

    let prescriptions = vec![
        Prescription {
            id: "rx1".into(),
            patient_id: "1".into(),
            patient_name: "Alice Johnson".into(),
            date: "2023-11-18".into(),
            diagnosis: "Mild Fever & Headache".into(),
            notes: "Rest and Hydrate.".into(),
            is_tapering: false,
            vitals: vitals("118/75", "70", "98.4", "99", "65"),
            medicines: vec![medicine("m1", "Paracetamol", "500mg", "TDS", "3 Days", "After food")],
            procedures_performed: vec![ProcedurePerformed {
                id: "p01".into(),
                name: "Dressing".into(),
                cost: "150".into(),
            }],
            template_name: "Fever".into(),
            template_id: Some("template-fever".into()),
        },
        Prescription {
            id: "rx2".into(),
            patient_id: "1".into(),
            patient_name: "Alice Johnson".into(),
            date: "2023-10-01".into(),
            diagnosis: "Common Cold".into(),
            notes: "OTC remedies.".into(),
            is_tapering: false,
            vitals: vitals("120/80", "72", "99.0", "98", "65"),
            medicines: vec![medicine("m3", "Cetirizine", "10mg", "OD", "5 Days", "Before bed")],
            procedures_performed: Vec::new(),
            template_name: "Cold".into(),
            template_id: Some("template-cold".into()),
        },
        Prescription {
            id: "rx3".into(),
            patient_id: "2".into(),
            patient_name: "Robert Smith".into(),
            date: "2023-11-05".into(),
            diagnosis: "Hypertension Check".into(),
            notes: "Maintain current medication.".into(),
            is_tapering: false,
            vitals: vitals("138/88", "78", "98.6", "98", "85"),
            medicines: vec![medicine(
                "m4",
                "Lisinopril",
                "10mg",
                "OD",
                "1 Month",
                "Before breakfast",
            )],
            procedures_performed: Vec::new(),
            template_name: "Custom".into(),
            template_id: None,
        },
    ];

    let templates = vec![
        Template::none(),
        Template {
            id: "template-cold".into(),
            name: "Cold".into(),
            diagnosis: "Common Cold / Allergic Rhinitis".into(),
            medicines: vec![
                medicine("tm1", "Cetirizine", "10mg", "OD", "5 Days", "At night"),
                medicine(
                    "tm2",
                    "Paracetamol",
                    "500mg",
                    "PRN",
                    "As needed",
                    "For fever/body ache",
                ),
            ],
        },
        Template {
            id: "template-fever".into(),
            name: "Fever".into(),
            diagnosis: "Viral Fever".into(),
            medicines: vec![medicine("tm3", "Paracetamol", "650mg", "TDS", "3 Days", "After food")],
        },
    ];

    let procedures = vec![
        procedure(
            "p1",
            "1",
            "Alice Johnson",
            "Wound Dressing",
            "2023-11-20",
            "500",
            "Minor scrape on the left knee.",
        ),
        procedure(
            "p2",
            "2",
            "Robert Smith",
            "Suture Removal",
            "2023-11-18",
            "300",
            "Post-op follow-up.",
        ),
        procedure(
            "p3",
            "1",
            "Alice Johnson",
            "IV Fluid Administration",
            "2023-10-05",
            "800",
            "Dehydration.",
        ),
    ];

    Snapshot {
        patients,
        labs,
        inventory,
        appointments,
        prescriptions,
        templates,
        procedures,
    }
}
