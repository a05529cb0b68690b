//! Sample documents describing a small flood-mapping project.
//!
//! The documents are valid but unformatted: text fields are padded plain
//! strings, inputs carry no defaults, and the task presenter has no subject.

use gtx_schema::{ConfigurationSet, DocumentKind};
use serde_json::{Value, json};

pub fn project() -> Value {
    json!({
        "name": "  Flood Watch  ",
        "short_name": "flood-watch",
        "description": "Identify flooded areas in satellite imagery. ",
        "repository": " https://github.com/geotagx/flood-watch"
    })
}

pub fn task_presenter() -> Value {
    json!({
        "language": {"default": "en", "available": ["en", "fr"]},
        "questionnaire": {
            "questions": [
                {
                    "key": "water",
                    "title": "Is there standing water in the image?",
                    "hint": {"en": "Look for reflections.", "fr": "Cherchez les reflets."},
                    "input": {
                        "type": "dropdown-list",
                        "options": [
                            {"value": "yes", "label": "Yes"},
                            {"value": "no", "label": "No"}
                        ]
                    }
                },
                {
                    "key": "damage",
                    "title": "Which structures are damaged?",
                    "help": "Select every structure that applies.",
                    "input": {
                        "type": "multiple-option",
                        "options": [
                            {"value": "roads", "label": "Roads"},
                            {"value": "bridges", "label": "Bridges"}
                        ],
                        "enable-multiple-choices": true
                    },
                    "branch": "comment"
                },
                {
                    "key": "comment",
                    "title": "Anything else?",
                    "input": {"type": "text", "min-length": 5}
                },
                {
                    "key": "location",
                    "title": "Where was the photo taken?",
                    "input": {"type": "geotagging"}
                }
            ]
        }
    })
}

pub fn tutorial() -> Value {
    json!({
        "enable-random-order": false,
        "default-message": {
            "on-correct-answer": "Well done!",
            "on-wrong-answer": "Not quite, try again."
        },
        "subjects": [
            {
                "source": "https://example.org/images/flood-01.jpg",
                "assertions": {
                    "water": {"expects": "yes", "message": "The field is covered in water."}
                }
            }
        ]
    })
}

/// A configuration set holding all three sample documents.
pub fn configuration_set() -> ConfigurationSet {
    let mut set = ConfigurationSet::new();
    set.insert(DocumentKind::Project, project());
    set.insert(DocumentKind::TaskPresenter, task_presenter());
    set.insert(DocumentKind::Tutorial, tutorial());
    set
}
