//! Header illustrations for the Login and Sign Up screens.
//!
//! Illustrations are plain text files looked up by name in an optional
//! directory. A file that cannot be read is logged and replaced by the
//! built-in banner; the user never sees the failure.

use std::fs;
use std::path::Path;

/// Which header an illustration belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllustrationKind {
    Login,
    SignUp,
}

impl IllustrationKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            IllustrationKind::Login => "illustration.txt",
            IllustrationKind::SignUp => "illustration1.txt",
        }
    }

    fn builtin(&self) -> &'static str {
        match self {
            IllustrationKind::Login => LOGIN_BANNER,
            IllustrationKind::SignUp => SIGN_UP_BANNER,
        }
    }
}

const LOGIN_BANNER: &str = r#"
      _    _ _ _
  ___| | _(_) | | __ _ _ __ ___
 / __| |/ / | | |/ _` | '__/ __|
 \__ \   <| | | | (_| | | | (__
 |___/_|\_\_|_|_|\__,_|_|  \___|
"#;

const SIGN_UP_BANNER: &str = r#"
     .-----------------------.
     |  +  join  skillarc  + |
     '-----------------------'
        \   (  o  o  )   /
         '---(  --  )---'
"#;

/// Header art for both illustrated screens
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assets {
    pub login: Vec<String>,
    pub sign_up: Vec<String>,
}

impl Default for Assets {
    fn default() -> Self {
        Assets {
            login: to_lines(IllustrationKind::Login.builtin()),
            sign_up: to_lines(IllustrationKind::SignUp.builtin()),
        }
    }
}

impl Assets {
    pub fn load(dir: Option<&Path>) -> Self {
        Assets {
            login: load_illustration(IllustrationKind::Login, dir),
            sign_up: load_illustration(IllustrationKind::SignUp, dir),
        }
    }
}

fn to_lines(text: &str) -> Vec<String> {
    text.lines()
        .skip_while(|line| line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load_illustration(kind: IllustrationKind, dir: Option<&Path>) -> Vec<String> {
    let Some(dir) = dir else {
        return to_lines(kind.builtin());
    };

    let path = dir.join(kind.file_name());
    match fs::read_to_string(&path) {
        Ok(content) => to_lines(&content),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Image load error, using built-in banner");
            to_lines(kind.builtin())
        }
    }
}
