use skillreport::error::ReportError;
use skillreport::loader;
use std::io::Cursor;

// The documented wire format, including the upstream "excercises"
// spelling and a skill score with no notes.
const SAMPLE_JSON: &str = r##"{
  "categories": [
    {
      "id": 1, "slug": "listening", "name": "Listening",
      "icon": "/media/listening.svg", "description": "<p>about</p>",
      "skills": [
        {
          "id": 10, "img": "/media/s.png", "description": "<p>skill</p>",
          "skill": {
            "slug": "active-listening", "name": "Active listening",
            "books": "<ul><li>book</li></ul>",
            "simulators": "sim",
            "excercises": "drill",
            "more": "more"
          }
        }
      ]
    }
  ],
  "contexts": [
    { "id": 5, "slug": "meetings", "name": "Meetings", "description": "<p>ctx</p>" }
  ],
  "result": {
    "name": "Test Taker",
    "finished_at": "2025-11-02T10:00:00Z",
    "data": {
      "category": {
        "listening": { "color": "#7367f0", "value": 62, "comment": "ok" }
      },
      "skills": {
        "active-listening": { "color": "#28c76f", "value": 40 }
      },
      "contexts": {
        "meetings": {
          "color": "#ea5455", "value": 55,
          "labels": ["a", "b"],
          "series": [ { "name": "You", "data": [55, 40] } ],
          "missing": [
            { "title": "gap", "value": 40, "ideal_value": 70, "color": "red" }
          ],
          "warnings": [ { "color": "danger", "text": "careful" } ]
        }
      }
    }
  }
}"##;

#[test]
fn decodes_the_wire_format() {
    let raw = loader::from_reader(Cursor::new(SAMPLE_JSON)).expect("decode failed");

    assert_eq!(raw.categories.len(), 1);
    assert_eq!(raw.categories[0].slug, "listening");
    assert_eq!(raw.contexts[0].slug, "meetings");
    assert_eq!(raw.result.name, "Test Taker");

    let cat_score = &raw.result.data.categories["listening"];
    assert_eq!(cat_score.value, 62.0);
    assert_eq!(cat_score.comment, "ok");

    let ctx_score = &raw.result.data.contexts["meetings"];
    assert_eq!(ctx_score.labels, vec!["a", "b"]);
    assert_eq!(ctx_score.series[0].data, vec![55.0, 40.0]);
    assert_eq!(ctx_score.missing[0].ideal_value, 70.0);
}

#[test]
fn accepts_the_upstream_excercises_spelling() {
    let raw = loader::from_reader(Cursor::new(SAMPLE_JSON)).unwrap();
    let skill = &raw.categories[0].skills[0].skill;
    assert_eq!(skill.exercises, "drill");
}

#[test]
fn absent_collections_default_to_empty() {
    let raw = loader::from_reader(Cursor::new(SAMPLE_JSON)).unwrap();
    let skill_score = &raw.result.data.skills["active-listening"];
    assert!(skill_score.notes.is_empty());
}

#[test]
fn loads_from_a_file_path() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("report.json");
    std::fs::write(&path, SAMPLE_JSON).unwrap();

    let raw = loader::load_file(&path).expect("load failed");
    assert_eq!(raw.categories[0].skills[0].skill.slug, "active-listening");
}

#[test]
fn malformed_json_is_a_json_error() {
    let err = loader::from_reader(Cursor::new("{ not json")).unwrap_err();
    assert!(matches!(err, ReportError::Json(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = loader::load_file("definitely/not/here.json").unwrap_err();
    assert!(matches!(err, ReportError::Io(_)));
}

#[test]
fn decoded_payload_shapes_cleanly() {
    let raw = loader::from_reader(Cursor::new(SAMPLE_JSON)).unwrap();
    let report = skillreport::api::ShapedReport::from_raw(&raw).unwrap();

    assert_eq!(report.categories.len(), 1);
    assert_eq!(report.categories[0].skills_ranked[0].value, 40.0);
    assert_eq!(report.contexts[0].value, 55.0);
}
