//! End-to-end fill over a page snapshot.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use formfill_core::FormFiller;
use formfill_dom::{Document, EventKind, PageSnapshot};
use formfill_protocols::{FieldDescriptor, GeneratedValue, GenerationError, ValueGenerator};
use rand::SeedableRng;
use rand::rngs::StdRng;

struct RecordingGenerator {
    values: Vec<GeneratedValue>,
    fields: Mutex<Vec<FieldDescriptor>>,
}

#[async_trait]
impl ValueGenerator for RecordingGenerator {
    fn id(&self) -> &str {
        "recording"
    }

    async fn generate(
        &self,
        fields: &[FieldDescriptor],
        _credential: &str,
    ) -> Result<Vec<GeneratedValue>, GenerationError> {
        *self.fields.lock().unwrap() = fields.to_vec();
        Ok(self.values.clone())
    }
}

fn fixture() -> Document {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/signup.json");
    let snapshot = PageSnapshot::load(&path).unwrap();
    Document::from_snapshot(&snapshot).unwrap()
}

#[tokio::test]
async fn test_fill_signup_snapshot() {
    let generator = Arc::new(RecordingGenerator {
        values: vec![
            GeneratedValue::new("Jane Doe"),
            GeneratedValue::new("jane.doe@example.com"),
            GeneratedValue::new("1990-04-03"),
            GeneratedValue::new("Sweden"),
            GeneratedValue::new(true),
            GeneratedValue::new("Keen gardener."),
        ],
        fields: Mutex::new(Vec::new()),
    });
    let mut document = fixture();
    let mut filler = FormFiller::new(generator.clone()).with_rng(StdRng::seed_from_u64(1));

    let summary = filler.fill(&mut document, "AIza-test").await;
    assert!(summary.success, "{}", summary.message);
    assert_eq!(summary.field_count, Some(6));

    let fields = generator.fields.lock().unwrap().clone();
    let labels: Vec<&str> = fields.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Full name", "Email", "Birthday", "Country", "Send me offers", ""]
    );
    let kinds: Vec<&str> = fields.iter().map(|f| f.kind.as_str()).collect();
    assert_eq!(
        kinds,
        vec!["text", "email", "date", "select-one", "checkbox", "textarea"]
    );

    let snapshot = serde_json::to_value(document.to_snapshot()).unwrap();
    let form = &snapshot["nodes"][0]["children"][0]["children"];
    assert_eq!(form[1]["attributes"]["value"], "Jane Doe");
    assert_eq!(form[2]["children"][1]["attributes"]["value"], "jane.doe@example.com");
    assert_eq!(form[4]["attributes"]["value"], "1990-04-03");
    assert_eq!(form[6]["children"][2]["attributes"]["selected"], "");
    assert_eq!(form[7]["children"][0]["attributes"]["checked"], "");
    assert!(form[10]["attributes"].get("value").is_none());
    assert_eq!(form[11]["children"][0]["text"], "Keen gardener.");

    // Two events per filled field.
    assert_eq!(document.events().len(), 12);
    assert!(
        document
            .events()
            .chunks(2)
            .all(|pair| pair[0].kind == EventKind::Input && pair[1].kind == EventKind::Change)
    );
}
