//! sielib — reading and writing SIE 4I accounting exchange files, plus
//! verification templates.

pub mod config;
pub mod error;
pub mod model;
pub mod template;
pub mod templates;
pub mod traits;

pub mod formats {
    pub mod csv;
    pub mod sie;
}
