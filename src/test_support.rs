use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Write `content` to `dir/rel`, creating intermediate directories.
pub(crate) fn write_fixture(dir: &Path, rel: &str, content: &str) -> PathBuf {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

pub(crate) struct Fixture {
    pub(crate) config: PathBuf,
    pub(crate) props: Vec<PathBuf>,
}

/// Lay out a config file, its templates and optional property files.
///
/// `templates` pairs a template file name (relative to `dir/conf/`) with its
/// content and destination.
pub(crate) fn create_fixture(
    dir: &Path,
    templates: &[(&str, &str, &PathBuf)],
    props: &[&str],
) -> Fixture {
    let mut config = String::new();
    for (name, content, destination) in templates {
        write_fixture(dir, &format!("conf/{name}"), content);
        config.push_str(&format!("{name}: {}\n", destination.display()));
    }
    let config = write_fixture(dir, "conf/config.yml", &config);

    let props = props
        .iter()
        .enumerate()
        .map(|(i, content)| write_fixture(dir, &format!("props/{i}.yml"), content))
        .collect();

    Fixture { config, props }
}
