// NeonArcade
// copyright agam 2024~2025

//! Utilities shared by the games: headings, grid points, rects
//! and project path helpers. The RNG wrapper lives in rand.rs.

use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::read_dir,
    io::{self, ErrorKind},
    path::{Path, PathBuf, MAIN_SEPARATOR},
};

mod rand;
pub use rand::*;

/// Determines the project path from command line arguments and environment.
///
/// With no arguments, `CARGO_MANIFEST_DIR` is used when present (set by
/// `cargo run`), falling back to ".". With one argument, that argument is
/// taken as the project path, which is how the games are launched from a
/// deployed binary.
pub fn get_project_path() -> String {
    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => {
            if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
                manifest_dir
            } else {
                ".".to_string()
            }
        }
        _ => args[1].clone(),
    }
}

/// Walks ancestors of the current dir looking for flag_file.
pub fn get_project_root(flag_file: &str) -> io::Result<PathBuf> {
    let path = env::current_dir()?;
    for p in path.as_path().ancestors() {
        let has_flag = read_dir(p)?.any(|e| match e {
            Ok(e) => e.file_name() == *flag_file,
            Err(_) => false,
        });
        if has_flag {
            return Ok(PathBuf::from(p));
        }
    }
    Err(io::Error::new(
        ErrorKind::NotFound,
        "Ran out of places to find flag_file",
    ))
}

/// Root of the workspace, located by its Cargo.lock. Lets deployed
/// binaries find the log directory and assets next to the lock file.
pub fn get_arcade_root_path() -> String {
    match get_project_root("Cargo.lock") {
        Ok(p) => p.to_string_lossy().into_owned(),
        Err(_e) => ".".to_string(),
    }
}

pub fn get_abs_path(fpath: &str) -> String {
    if Path::new(fpath).is_relative() {
        format!("{}{}{}", get_arcade_root_path(), MAIN_SEPARATOR, fpath)
    } else {
        fpath.to_string()
    }
}

/// A cardinal heading. The arcade games are all 4-way grid games, so
/// diagonals don't exist here.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    /// The heading pointing the other way. A snake may never steer to
    /// the opposite of its committed heading.
    pub fn opposite(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }

    /// One-cell displacement in grid coordinates, y growing downwards.
    pub fn delta(self) -> (i16, i16) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointU16 {
    pub x: u16,
    pub y: u16,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(self) -> u16 {
        self.width * self.height
    }

    pub fn left(self) -> u16 {
        self.x
    }

    pub fn right(self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub fn top(self) -> u16 {
        self.y
    }

    pub fn bottom(self) -> u16 {
        self.y.saturating_add(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_opposite() {
        assert_eq!(Dir::Up.opposite(), Dir::Down);
        assert_eq!(Dir::Down.opposite(), Dir::Up);
        assert_eq!(Dir::Left.opposite(), Dir::Right);
        assert_eq!(Dir::Right.opposite(), Dir::Left);
    }

    #[test]
    fn test_dir_delta_is_unit() {
        for d in [Dir::Up, Dir::Down, Dir::Left, Dir::Right] {
            let (dx, dy) = d.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }
}
