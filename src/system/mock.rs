//! Mock system implementation for testing

use super::{CommandStatus, System};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, RwLock};

/// A subprocess invocation recorded by `MockSystem`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory at the time of the call
    pub cwd: PathBuf,
}

/// In-memory implementation of System trait for testing
///
/// `MockSystem` provides an in-memory filesystem, a fake search path and
/// a recorder for subprocess invocations. Commands succeed unless a
/// failure has been scripted for an argument prefix.
///
/// # Example
/// ```
/// use sparseclone::system::{mock::MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_program("git").unwrap()
///     .with_dir("/work/proj").unwrap()
///     .with_current_dir("/work").unwrap();
///
/// assert!(system.which("git").is_some());
/// assert!(system.exists(Path::new("/work/proj")));
/// ```
#[derive(Clone)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

struct MockSystemState {
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
    programs: HashSet<String>,
    failures: Vec<(Vec<String>, i32)>,
    spawn_errors: Vec<Vec<String>>,
    invocations: Vec<Invocation>,
}

impl MockSystem {
    /// Create a new `MockSystem` with default state
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockSystemState {
                current_dir: PathBuf::from("/"),
                config_dir: None,
                files: HashMap::new(),
                dirs: HashSet::from([PathBuf::from("/")]),
                programs: HashSet::new(),
                failures: Vec::new(),
                spawn_errors: Vec::new(),
                invocations: Vec::new(),
            })),
        }
    }

    fn update<F: FnOnce(&mut MockSystemState)>(self, f: F) -> io::Result<Self> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        f(&mut state);
        drop(state);
        Ok(self)
    }

    /// Set the current working directory (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_current_dir<P: AsRef<Path>>(self, dir: P) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        self.update(|state| {
            Self::ensure_parent_dirs(&mut state.dirs, &dir);
            state.current_dir = dir;
        })
    }

    /// Set the platform configuration directory (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_config_dir<P: AsRef<Path>>(self, dir: P) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        self.update(|state| state.config_dir = Some(dir))
    }

    /// Add a file with contents (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_file<P: AsRef<Path>>(self, path: P, contents: &[u8]) -> io::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        self.update(|state| {
            if let Some(parent) = path_buf.parent() {
                Self::ensure_parent_dirs(&mut state.dirs, parent);
            }
            state.files.insert(path_buf, contents.to_vec());
        })
    }

    /// Add a directory (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_dir<P: AsRef<Path>>(self, path: P) -> io::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        self.update(|state| Self::ensure_parent_dirs(&mut state.dirs, &path_buf))
    }

    /// Make a program resolvable on the search path (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_program(self, program: &str) -> io::Result<Self> {
        let program = program.to_owned();
        self.update(|state| {
            state.programs.insert(program);
        })
    }

    /// Make every command whose arguments start with `args_prefix` exit with `code`
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_failure(self, args_prefix: &[&str], code: i32) -> io::Result<Self> {
        let prefix: Vec<String> = args_prefix
            .iter()
            .map(|s| (*s).to_owned())
            .collect();
        self.update(|state| state.failures.push((prefix, code)))
    }

    /// Make every command whose arguments start with `args_prefix` fail to spawn
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_spawn_error(self, args_prefix: &[&str]) -> io::Result<Self> {
        let prefix: Vec<String> = args_prefix
            .iter()
            .map(|s| (*s).to_owned())
            .collect();
        self.update(|state| state.spawn_errors.push(prefix))
    }

    /// All subprocess invocations recorded so far, in call order
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn invocations(&self) -> io::Result<Vec<Invocation>> {
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;
        Ok(state.invocations.clone())
    }

    #[inline]
    fn ensure_parent_dirs(dirs: &mut HashSet<PathBuf>, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor == Path::new("") {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    fn resolve(current: &Path, path: &Path) -> PathBuf {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            current.join(path)
        };

        let mut resolved = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    resolved.pop();
                }
                other => resolved.push(other),
            }
        }
        resolved
    }

    fn starts_with(args: &[String], prefix: &[String]) -> bool {
        args.len() >= prefix.len() && args.iter().zip(prefix).all(|(a, p)| a == p)
    }
}

impl Default for MockSystem {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl System for MockSystem {
    #[inline]
    fn current_dir(&self) -> io::Result<PathBuf> {
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;
        Ok(state.current_dir.clone())
    }

    #[inline]
    fn set_current_dir(&self, path: &Path) -> io::Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        let target = Self::resolve(&state.current_dir, path);
        if !state.dirs.contains(&target) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Directory not found: {}", target.display()),
            ));
        }
        state.current_dir = target;
        drop(state);
        Ok(())
    }

    #[inline]
    fn config_dir(&self) -> Option<PathBuf> {
        self.state.read().ok()?.config_dir.clone()
    }

    #[inline]
    fn which(&self, program: &str) -> Option<PathBuf> {
        let state = self.state.read().ok()?;
        state
            .programs
            .contains(program)
            .then(|| PathBuf::from("/usr/bin").join(program))
    }

    #[inline]
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;
        let target = Self::resolve(&state.current_dir, path);
        let bytes = state.files.get(&target).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })?;
        drop(state);
        String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {e}")))
    }

    #[inline]
    fn exists(&self, path: &Path) -> bool {
        self.state.read().is_ok_and(|state| {
            let target = Self::resolve(&state.current_dir, path);
            state.files.contains_key(&target) || state.dirs.contains(&target)
        })
    }

    #[inline]
    fn absolute(&self, path: &Path) -> io::Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Ok(self.current_dir()?.join(path))
        }
    }

    #[inline]
    fn run_command(&self, program: &str, args: &[String]) -> io::Result<CommandStatus> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;

        let invocation = Invocation {
            program: program.to_owned(),
            args: args.to_vec(),
            cwd: state.current_dir.clone(),
        };
        state.invocations.push(invocation);

        if state
            .spawn_errors
            .iter()
            .any(|prefix| Self::starts_with(args, prefix))
        {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("No such file or directory: {program}"),
            ));
        }

        let code = state
            .failures
            .iter()
            .find(|(prefix, _)| Self::starts_with(args, prefix))
            .map_or(0, |(_, code)| *code);
        drop(state);

        Ok(CommandStatus::from_code(code))
    }
}
