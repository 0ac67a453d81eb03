use std::io;
use std::path::Path;

use html_escape::{encode_double_quoted_attribute, encode_text};

const PAGE_TITLE: &str = "Directory Listing";

/// One entry of a directory, as shown in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// Reads one level of `dir`, sorted by name. Symlinks are reported by their
/// own type, not their target's.
pub async fn read_entries(dir: impl AsRef<Path>) -> io::Result<Vec<DirEntry>> {
    let mut reader = tokio::fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while let Some(entry) = reader.next_entry().await? {
        let is_dir = entry.file_type().await?.is_dir();
        entries.push(DirEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Renders the index page for a directory requested at `request_path`.
pub fn render_listing(request_path: &str, entries: &[DirEntry]) -> String {
    let prefix = if request_path.ends_with('/') {
        request_path.to_string()
    } else {
        format!("{}/", request_path)
    };

    let items: String = entries
        .iter()
        .map(|entry| list_item(&prefix, entry))
        .collect();

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <ul>\n\
         {items}\
         </ul>\n\
         </body>\n\
         </html>\n",
        title = PAGE_TITLE,
        items = items,
    )
}

fn list_item(prefix: &str, entry: &DirEntry) -> String {
    let slash = if entry.is_dir { "/" } else { "" };
    let href = format!("{}{}{}", prefix, entry.name, slash);
    format!(
        "<li><a href=\"{href}\">{name}</a></li>\n",
        href = encode_double_quoted_attribute(&href),
        name = encode_text(&entry.name),
    )
}
