use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::artifacts::ModelArtifacts;
use crate::error::PredictError;
use crate::model::{self, StudentProfile};
use crate::recommend;

#[derive(Serialize)]
struct ModelInfo {
    algorithm: &'static str,
    n_features: usize,
    feature_names: Vec<String>,
    school_types: Vec<String>,
    locations: Vec<String>,
    parental_education_levels: Vec<String>,
}

/// Prediction endpoint. Validation and encoding failures come back as 422
/// with a field-level message via the PredictError response impl.
async fn predict(
    req: web::Json<StudentProfile>,
    artifacts: web::Data<ModelArtifacts>,
) -> Result<HttpResponse, PredictError> {
    let result = model::predict(&artifacts, &req)?;
    Ok(HttpResponse::Ok().json(result))
}

/// Model info endpoint. The form pulls its category lists from here so the
/// dropdowns always match the training-time vocabulary.
async fn get_model_info(artifacts: web::Data<ModelArtifacts>) -> HttpResponse {
    HttpResponse::Ok().json(ModelInfo {
        algorithm: "Linear Regression",
        n_features: artifacts.n_features(),
        feature_names: artifacts.model.feature_names.clone(),
        school_types: artifacts.encoders.school_type.categories.clone(),
        locations: artifacts.encoders.location.categories.clone(),
        parental_education_levels: artifacts.encoders.parental_education.classes.clone(),
    })
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().body("Student Performance Dashboard is running!")
}

/// Success tips endpoint
async fn get_success_tips() -> HttpResponse {
    HttpResponse::Ok().json(recommend::success_tips())
}

/// Homepage endpoint
async fn serve_homepage() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html")
        .body(DASHBOARD_HTML)
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(serve_homepage))
        .route("/predict", web::post().to(predict))
        .route("/model/info", web::get().to(get_model_info))
        .route("/health", web::get().to(health_check))
        .route("/tips", web::get().to(get_success_tips));
}

const DASHBOARD_HTML: &str = r##"
    <!DOCTYPE html>
    <html>
    <head>
        <title>School Student Performance Dashboard</title>
        <style>
            body { font-family: Arial, sans-serif; max-width: 900px; margin: 40px auto; padding: 20px; }
            .container { background: #f5f5f5; padding: 25px; border-radius: 10px; }
            .header { text-align: center; padding: 1.5rem; background: linear-gradient(90deg, #667eea 0%, #764ba2 100%); color: white; border-radius: 10px; margin-bottom: 20px; }
            .form-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; }
            .form-group { margin: 8px 0; }
            label { display: block; margin-bottom: 5px; font-weight: bold; }
            input, select { width: 100%; padding: 8px; border: 1px solid #ddd; border-radius: 4px; box-sizing: border-box; }
            button { background: #007bff; color: white; padding: 12px 24px; border: none; border-radius: 4px; cursor: pointer; margin: 12px 0; width: 100%; font-size: 1rem; }
            button:hover { background: #0056b3; }
            .result { margin-top: 20px; padding: 20px; border-radius: 8px; display: none; }
            .outstanding { background: #d4edda; color: #155724; border: 1px solid #c3e6cb; }
            .excellent { background: #d1ecf1; color: #0c5460; border: 1px solid #bee5eb; }
            .good { background: #fff3cd; color: #856404; border: 1px solid #ffeaa7; }
            .needsimprovement { background: #f8d7da; color: #721c24; border: 1px solid #f5c6cb; }
            .error { background: #f8d7da; color: #721c24; border: 1px solid #f5c6cb; }
            .score { font-size: 3rem; margin: 0.5rem 0; text-align: center; }
            .bar-row { margin: 6px 0; }
            .bar-label { font-size: 0.85rem; margin-bottom: 2px; }
            .bar-track { background: #e9ecef; border-radius: 4px; height: 18px; }
            .bar-fill { background: #667eea; border-radius: 4px; height: 18px; }
            .columns { display: grid; grid-template-columns: 1fr 1fr; gap: 15px; margin-top: 15px; }
            .panel { background: white; padding: 12px; border-radius: 8px; border-left: 4px solid #667eea; }
        </style>
    </head>
    <body>
        <div class="container">
            <div class="header">
                <h1>School Student Performance Dashboard</h1>
                <p>Predict and improve your academic performance - designed for Grades 6-12</p>
            </div>

            <div class="form-grid">
                <div class="form-group">
                    <label for="grade_level">Grade Level</label>
                    <select id="grade_level">
                        <option>6</option><option>7</option><option>8</option>
                        <option selected>9</option><option>10</option><option>11</option><option>12</option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="parental_education">Parent's Education Level</label>
                    <select id="parental_education"></select>
                </div>
                <div class="form-group">
                    <label for="hours_studied">Daily Study Hours (0-8)</label>
                    <input type="number" id="hours_studied" step="0.5" min="0" max="8" value="3.0">
                </div>
                <div class="form-group">
                    <label for="attendance">School Attendance % (0-100)</label>
                    <input type="number" id="attendance" step="1" min="0" max="100" value="85">
                </div>
                <div class="form-group">
                    <label for="previous_exam_level">Last Report Card Level (1-10)</label>
                    <input type="number" id="previous_exam_level" step="1" min="1" max="10" value="6">
                </div>
                <div class="form-group">
                    <label for="school_type">School Type</label>
                    <select id="school_type"></select>
                </div>
                <div class="form-group">
                    <label for="location">School Location</label>
                    <select id="location"></select>
                </div>
                <div class="form-group">
                    <label for="internet_hours">Daily Internet Hours (0-10)</label>
                    <input type="number" id="internet_hours" step="0.5" min="0" max="10" value="3.0">
                </div>
                <div class="form-group">
                    <label for="sleep_hours">Sleep Hours per Night (6-12)</label>
                    <input type="number" id="sleep_hours" step="0.5" min="6" max="12" value="8.0">
                </div>
                <div class="form-group">
                    <label for="activity_count">Extracurricular Activities (0-10)</label>
                    <input type="number" id="activity_count" step="1" min="0" max="10" value="2">
                </div>
            </div>

            <button onclick="predict()">Predict My Performance</button>

            <div id="result" class="result"></div>
        </div>

        <script>
            async function loadModelInfo() {
                try {
                    const response = await fetch('/model/info');
                    const info = await response.json();
                    fillSelect('parental_education', info.parental_education_levels);
                    fillSelect('school_type', info.school_types);
                    fillSelect('location', info.locations);
                } catch (error) {
                    console.error('Failed to load model info', error);
                }
            }

            function fillSelect(id, options) {
                const select = document.getElementById(id);
                select.innerHTML = options.map(o => `<option>${o}</option>`).join('');
            }

            function num(id) {
                return parseFloat(document.getElementById(id).value);
            }

            function text(id) {
                return document.getElementById(id).value;
            }

            async function predict() {
                const resultDiv = document.getElementById('result');
                const profile = {
                    grade_level: parseInt(text('grade_level')),
                    parental_education: text('parental_education'),
                    hours_studied: num('hours_studied'),
                    attendance: num('attendance'),
                    previous_exam_level: parseInt(text('previous_exam_level')),
                    school_type: text('school_type'),
                    location: text('location'),
                    internet_hours: num('internet_hours'),
                    sleep_hours: num('sleep_hours'),
                    activity_count: parseInt(text('activity_count'))
                };

                try {
                    const response = await fetch('/predict', {
                        method: 'POST',
                        headers: {'Content-Type': 'application/json'},
                        body: JSON.stringify(profile)
                    });
                    const data = await response.json();

                    resultDiv.style.display = 'block';
                    if (!response.ok) {
                        resultDiv.className = 'result error';
                        resultDiv.innerHTML = `<h3>Submission rejected</h3><p>${data.error}</p>`;
                        return;
                    }

                    const levelClass = data.level.toLowerCase();
                    resultDiv.className = 'result ' + levelClass;
                    resultDiv.innerHTML = `
                        <h2 style="text-align:center;">${data.level_label} Performance</h2>
                        <div class="score">${data.score.toFixed(1)}/100</div>
                        <p style="text-align:center;">${data.insight.headline}</p>
                        <h4>Performance Factors</h4>
                        ${data.factors.factors.map(f => `
                            <div class="bar-row">
                                <div class="bar-label">${f.name}: ${f.percent.toFixed(0)}%</div>
                                <div class="bar-track"><div class="bar-fill" style="width:${Math.min(100, f.percent)}%"></div></div>
                            </div>
                        `).join('')}
                        <div class="columns">
                            <div class="panel">
                                <h4>Your Strengths</h4>
                                <ul>${data.factors.strengths.map(s => `<li>${s}</li>`).join('')}</ul>
                            </div>
                            <div class="panel">
                                <h4>Growth Areas</h4>
                                <ul>${data.factors.growth_areas.map(g => `<li>${g}</li>`).join('')}</ul>
                            </div>
                        </div>
                        <div class="panel" style="margin-top:15px;">
                            <h4>Action Items</h4>
                            <ol>${data.insight.tips.map(t => `<li>${t}</li>`).join('')}</ol>
                            <p><em>${data.insight.grade_advice}</em></p>
                        </div>
                    `;
                    resultDiv.scrollIntoView({behavior: 'smooth'});
                } catch (error) {
                    resultDiv.style.display = 'block';
                    resultDiv.className = 'result error';
                    resultDiv.innerHTML = `<p>Error: ${error.message}</p>`;
                }
            }

            loadModelInfo();
        </script>
    </body>
    </html>
    "##;
