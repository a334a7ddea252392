pub mod bootstrap;
pub mod foundation;

use maud::Markup;

use crate::{
    error::PagyError,
    frontend::{Frontend, NavOptions},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Framework {
    Bootstrap,
    Foundation,
}

impl Framework {
    pub const ALL: [Framework; 2] = [Framework::Bootstrap, Framework::Foundation];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bootstrap => "bootstrap",
            Self::Foundation => "foundation",
        }
    }

    pub fn render(
        &self,
        kind: NavKind,
        fe: &Frontend,
        opts: &NavOptions,
    ) -> Result<Markup, PagyError> {
        match (self, kind) {
            (Self::Bootstrap, NavKind::Nav) => bootstrap::nav(fe, opts),
            (Self::Bootstrap, NavKind::NavJs) => bootstrap::nav_js(fe, opts),
            (Self::Bootstrap, NavKind::ComboNavJs) => bootstrap::combo_nav_js(fe, opts),
            (Self::Foundation, NavKind::Nav) => foundation::nav(fe, opts),
            (Self::Foundation, NavKind::NavJs) => foundation::nav_js(fe, opts),
            (Self::Foundation, NavKind::ComboNavJs) => foundation::combo_nav_js(fe, opts),
        }
    }
}

impl std::str::FromStr for Framework {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bootstrap" => Ok(Self::Bootstrap),
            "foundation" => Ok(Self::Foundation),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKind {
    Nav,
    NavJs,
    ComboNavJs,
}

impl NavKind {
    pub const ALL: [NavKind; 3] = [NavKind::Nav, NavKind::NavJs, NavKind::ComboNavJs];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nav => "nav",
            Self::NavJs => "nav-js",
            Self::ComboNavJs => "combo-nav-js",
        }
    }
}

impl std::str::FromStr for NavKind {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nav" => Ok(Self::Nav),
            "nav-js" => Ok(Self::NavJs),
            "combo-nav-js" => Ok(Self::ComboNavJs),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for NavKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
