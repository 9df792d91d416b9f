use crate::error::TutorError;
use crate::models::Attachment;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions the browser offers for attaching.
pub const DOCUMENT_EXTENSIONS: [&str; 3] = ["pdf", "docx", "pptx"];

pub fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            DOCUMENT_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

/// Files attached during this run, in attach order.
#[derive(Debug, Default)]
pub struct StudyShelf {
    items: Vec<Attachment>,
    selected: Option<usize>,
}

impl StudyShelf {
    pub fn items(&self) -> &[Attachment] {
        &self.items
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn attach(&mut self, path: &Path, subject: &str) -> Result<&Attachment, TutorError> {
        if !path.is_file() {
            return Err(TutorError::FileNotFound(path.to_path_buf()));
        }
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        self.items.push(Attachment {
            file_name,
            path: path.to_path_buf(),
            subject: subject.to_string(),
            attached_at: chrono::Local::now(),
        });
        let index = self.items.len() - 1;
        if self.selected.is_none() {
            self.selected = Some(index);
        }
        Ok(&self.items[index])
    }

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(self.items.len() - 1),
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    /// The selected file, provided it still exists on disk.
    pub fn openable(&self) -> Result<&Attachment, TutorError> {
        let attachment = self
            .selected
            .and_then(|i| self.items.get(i))
            .ok_or(TutorError::NoSelection("a file to open"))?;
        if !attachment.path.exists() {
            return Err(TutorError::FileNotFound(attachment.path.clone()));
        }
        Ok(attachment)
    }
}

/// Hands `path` to the desktop's default application.
pub fn launch(path: &Path) -> Result<(), TutorError> {
    open::that(path)?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEntry {
    Parent,
    Directory(PathBuf),
    Document(PathBuf),
}

impl BrowserEntry {
    pub fn label(&self) -> String {
        match self {
            BrowserEntry::Parent => "../".to_string(),
            BrowserEntry::Directory(path) => format!("{}/", file_label(path)),
            BrowserEntry::Document(path) => file_label(path),
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Directory listing restricted to sub-directories and documents.
#[derive(Debug)]
pub struct FileBrowser {
    pub dir: PathBuf,
    pub entries: Vec<BrowserEntry>,
    pub selected: usize,
}

pub enum BrowserAction {
    None,
    Pick(PathBuf),
}

impl FileBrowser {
    pub fn open(dir: &Path) -> Result<Self, TutorError> {
        let dir = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        let entries = list_entries(&dir)?;
        Ok(Self {
            dir,
            entries,
            selected: 0,
        })
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn go_up(&mut self) -> Result<(), TutorError> {
        if let Some(parent) = self.dir.parent().map(Path::to_path_buf) {
            self.change_dir(parent)?;
        }
        Ok(())
    }

    /// Enters the highlighted directory or picks the highlighted document.
    pub fn activate(&mut self) -> Result<BrowserAction, TutorError> {
        match self.entries.get(self.selected).cloned() {
            Some(BrowserEntry::Parent) => {
                self.go_up()?;
                Ok(BrowserAction::None)
            }
            Some(BrowserEntry::Directory(path)) => {
                self.change_dir(path)?;
                Ok(BrowserAction::None)
            }
            Some(BrowserEntry::Document(path)) => Ok(BrowserAction::Pick(path)),
            None => Err(TutorError::NoSelection("a document to attach")),
        }
    }

    fn change_dir(&mut self, dir: PathBuf) -> Result<(), TutorError> {
        self.entries = list_entries(&dir)?;
        self.dir = dir;
        self.selected = 0;
        Ok(())
    }
}

fn list_entries(dir: &Path) -> Result<Vec<BrowserEntry>, TutorError> {
    let mut dirs = Vec::new();
    let mut documents = Vec::new();

    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        let hidden = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with('.'));
        if hidden {
            continue;
        }
        if path.is_dir() {
            dirs.push(path);
        } else if is_document(&path) {
            documents.push(path);
        }
    }

    dirs.sort();
    documents.sort();

    let mut entries = Vec::with_capacity(dirs.len() + documents.len() + 1);
    if dir.parent().is_some() {
        entries.push(BrowserEntry::Parent);
    }
    entries.extend(dirs.into_iter().map(BrowserEntry::Directory));
    entries.extend(documents.into_iter().map(BrowserEntry::Document));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_is_document_filters_extensions() {
        assert!(is_document(Path::new("notes.pdf")));
        assert!(is_document(Path::new("slides.PPTX")));
        assert!(is_document(Path::new("essay.docx")));
        assert!(!is_document(Path::new("script.py")));
        assert!(!is_document(Path::new("README")));
    }

    #[test]
    fn test_browser_lists_dirs_and_documents() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("week1")).unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        touch(&dir.path().join("b.pdf"));
        touch(&dir.path().join("a.docx"));
        touch(&dir.path().join("data.json"));
        touch(&dir.path().join("c.txt"));

        let browser = FileBrowser::open(dir.path()).unwrap();
        let labels: Vec<String> = browser.entries.iter().map(BrowserEntry::label).collect();
        assert_eq!(labels, vec!["../", "week1/", "a.docx", "b.pdf"]);
    }

    #[test]
    fn test_browser_enters_directory_and_picks() {
        let dir = tempfile::tempdir().unwrap();
        let week = dir.path().join("week1");
        fs::create_dir(&week).unwrap();
        touch(&week.join("lecture.pdf"));

        let mut browser = FileBrowser::open(dir.path()).unwrap();
        browser.select_next();
        assert!(matches!(browser.activate().unwrap(), BrowserAction::None));
        assert!(browser.dir.ends_with("week1"));
        assert_eq!(browser.entries.len(), 2);

        browser.select_next();
        match browser.activate().unwrap() {
            BrowserAction::Pick(path) => assert!(path.ends_with("lecture.pdf")),
            BrowserAction::None => panic!("expected a picked document"),
        }

        browser.go_up().unwrap();
        assert!(browser.entries.contains(&BrowserEntry::Directory(browser.dir.join("week1"))));
    }

    #[test]
    fn test_attach_records_name_and_selects_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.pdf");
        touch(&path);

        let mut shelf = StudyShelf::default();
        let attachment = shelf.attach(&path, "ADBMS").unwrap();
        assert_eq!(attachment.file_name, "notes.pdf");
        assert_eq!(attachment.subject, "ADBMS");
        assert_eq!(shelf.selected(), Some(0));
        assert_eq!(shelf.openable().unwrap().path, path);
    }

    #[test]
    fn test_attach_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut shelf = StudyShelf::default();
        let err = shelf.attach(&dir.path().join("gone.pdf"), "ADBMS").unwrap_err();
        assert!(matches!(err, TutorError::FileNotFound(_)));
        assert!(shelf.items().is_empty());
    }

    #[test]
    fn test_open_without_selection() {
        let shelf = StudyShelf::default();
        assert!(matches!(
            shelf.openable().unwrap_err(),
            TutorError::NoSelection(_)
        ));
    }

    #[test]
    fn test_open_after_file_removed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.pdf");
        touch(&path);

        let mut shelf = StudyShelf::default();
        shelf.attach(&path, "AI Tools").unwrap();
        fs::remove_file(&path).unwrap();
        assert!(matches!(
            shelf.openable().unwrap_err(),
            TutorError::FileNotFound(_)
        ));
    }

    #[test]
    fn test_shelf_selection_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let mut shelf = StudyShelf::default();
        shelf.select_next();
        assert_eq!(shelf.selected(), None);

        for name in ["a.pdf", "b.pdf"] {
            let path = dir.path().join(name);
            touch(&path);
            shelf.attach(&path, "AI Tools").unwrap();
        }
        shelf.select_next();
        shelf.select_next();
        assert_eq!(shelf.selected(), Some(1));
        shelf.select_previous();
        shelf.select_previous();
        assert_eq!(shelf.selected(), Some(0));
    }
}
