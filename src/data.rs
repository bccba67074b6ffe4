use serde::Deserialize;

/// One labeled row of the training dataset. Column names follow the CSV
/// header of `data/student_dataset.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainingRecord {
    #[serde(rename = "School_Type")]
    pub school_type: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Hours_Studied")]
    pub hours_studied: f64,
    #[serde(rename = "Attendance")]
    pub attendance: f64,
    #[serde(rename = "Previous_Exam_Level")]
    pub previous_exam_level: f64,
    #[serde(rename = "Parental_Education")]
    pub parental_education: String,
    #[serde(rename = "Internet_Hours")]
    pub internet_hours: f64,
    #[serde(rename = "Sleep_Hours")]
    pub sleep_hours: f64,
    #[serde(rename = "Score")]
    pub score: f64,
}

pub fn load_dataset(path: &str) -> Result<Vec<TrainingRecord>, csv::Error> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        records.push(result?);
    }
    Ok(records)
}
