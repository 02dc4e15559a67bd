use anyhow::{Context, Result};
use search_core::{paginate, Document, DocumentStatus, RequestQueue, SearchConfig, SearchServer};
use serde::Deserialize;
use walkdir::WalkDir;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct InputDoc {
    pub id: i32,
    pub text: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub ratings: Vec<i32>,
}

/// Read documents from a `.json`/`.jsonl` file or every such file under a directory.
pub fn load_documents(input: &Path) -> Result<Vec<InputDoc>> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && matches!(p.extension().and_then(|s| s.to_str()), Some("json" | "jsonl")) {
                files.push(p.to_path_buf());
            }
        }
    } else {
        files.push(input.to_path_buf());
    }

    let mut docs = Vec::new();
    for file in files {
        if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
            read_jsonl(&file, &mut docs)?;
        } else {
            read_json(&file, &mut docs)?;
        }
    }
    Ok(docs)
}

fn read_jsonl(file: &Path, docs: &mut Vec<InputDoc>) -> Result<()> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    for (n, line) in BufReader::new(f).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let doc = serde_json::from_str(&line).with_context(|| format!("{}:{}", file.display(), n + 1))?;
        docs.push(doc);
    }
    Ok(())
}

fn read_json(file: &Path, docs: &mut Vec<InputDoc>) -> Result<()> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(f)).with_context(|| format!("parsing {}", file.display()))?;
    match json {
        serde_json::Value::Array(arr) => {
            for (i, v) in arr.into_iter().enumerate() {
                docs.push(serde_json::from_value(v).with_context(|| format!("{}[{i}]", file.display()))?);
            }
        }
        serde_json::Value::Object(_) => {
            docs.push(serde_json::from_value(json).with_context(|| format!("parsing {}", file.display()))?)
        }
        _ => anyhow::bail!("{}: expected a document object or an array of them", file.display()),
    }
    Ok(())
}

pub fn build_server(stop_words: &str, config: SearchConfig, docs: &[InputDoc]) -> Result<SearchServer> {
    let stop_words = search_core::StopWords::parse(stop_words)?;
    let mut server = SearchServer::with_config(stop_words, config);
    for doc in docs {
        server
            .add_document(doc.id, &doc.text, doc.status, &doc.ratings)
            .with_context(|| format!("adding document {}", doc.id))?;
    }
    tracing::info!(num_docs = server.document_count(), "index built");
    Ok(server)
}

/// Results page by page, each page followed by a `Page break` line.
pub fn render_pages(results: &[Document], page_size: usize) -> String {
    let mut out = String::new();
    for page in paginate(results, page_size) {
        out.push_str(&format!("{page}\nPage break\n"));
    }
    out
}

/// Feed each non-empty line through a request queue; returns the no-result count.
pub fn replay<'a, I>(server: &SearchServer, queries: I, window: usize) -> Result<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut queue = RequestQueue::with_window(server, window);
    for query in queries.into_iter().map(str::trim).filter(|q| !q.is_empty()) {
        queue.add_find_request(query).with_context(|| format!("query {query:?}"))?;
    }
    Ok(queue.no_result_requests())
}
