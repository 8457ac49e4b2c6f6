//! The default sample files.
//!
//! Every fresh store starts with these three, so the editor never opens on an
//! empty screen. Their fixed ids make them easy to recognize in tests.

use chrono::Utc;

use crate::model::FileRecord;

pub fn default_files() -> Vec<FileRecord> {
    let now = Utc::now();

    vec![
        FileRecord {
            id: "sample-js".into(),
            name: "example.js".into(),
            content: JS_SAMPLE.into(),
            language: "javascript".into(),
            extension: ".js".into(),
            created_at: now,
        },
        FileRecord {
            id: "sample-py".into(),
            name: "example.py".into(),
            content: PY_SAMPLE.into(),
            language: "python".into(),
            extension: ".py".into(),
            created_at: now,
        },
        FileRecord {
            id: "sample-css".into(),
            name: "styles.css".into(),
            content: CSS_SAMPLE.into(),
            language: "css".into(),
            extension: ".css".into(),
            created_at: now,
        },
    ]
}

const JS_SAMPLE: &str = r#"// JavaScript Example
function greetUser(name) {
  console.log(`Hello, ${name}! Welcome to the snippet editor.`);

  const stats = {
    filesShared: Math.floor(Math.random() * 50),
    lastVisit: new Date().toISOString(),
    isActive: true
  };

  return stats;
}

const userStats = greetUser('Developer');
console.log('User stats:', userStats);

// Array methods example
const languages = ['JavaScript', 'Python', 'Java', 'C++', 'Go'];
const webLanguages = languages.filter(lang =>
  ['JavaScript', 'Python'].includes(lang)
);

console.log('Web languages:', webLanguages);

// Async/await example
async function fetchData() {
  try {
    const response = await fetch('/api/files');
    return await response.json();
  } catch (error) {
    console.error('Error fetching data:', error);
  }
}
"#;

const PY_SAMPLE: &str = r#"# Python Example
import datetime
import random
import json

def analyze_data(data_list):
    """Analyze a list of numbers and return statistics."""
    if not data_list:
        return {"error": "No data provided"}

    return {
        "count": len(data_list),
        "sum": sum(data_list),
        "average": sum(data_list) / len(data_list),
        "min": min(data_list),
        "max": max(data_list),
        "timestamp": datetime.datetime.now().isoformat(),
    }

sample_data = [random.randint(1, 100) for _ in range(10)]
print(f"Sample data: {sample_data}")

results = analyze_data(sample_data)
print(f"Analysis results: {json.dumps(results, indent=2)}")

# List comprehension example
squares = [x**2 for x in range(1, 11) if x % 2 == 0]
print(f"Even squares: {squares}")
"#;

const CSS_SAMPLE: &str = r#"/* Modern CSS Example - Dark Theme */
:root {
  --primary-color: #3b82f6;
  --accent-color: #10b981;
  --bg-primary: #0f172a;
  --bg-secondary: #1e293b;
  --text-primary: #f8fafc;
  --text-secondary: #cbd5e1;
  --border-color: #334155;
  --border-radius: 8px;
  --transition: all 0.2s ease;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  background: var(--bg-primary);
  color: var(--text-primary);
  line-height: 1.6;
}

.btn {
  padding: 0.75rem 1.5rem;
  border-radius: var(--border-radius);
  border: none;
  cursor: pointer;
  font-weight: 500;
  transition: var(--transition);
}

.btn-primary {
  background: var(--primary-color);
  color: white;
}

.card {
  background: var(--bg-secondary);
  border-radius: var(--border-radius);
  padding: 1.5rem;
  border: 1px solid var(--border-color);
}

@keyframes fadeIn {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}
"#;
