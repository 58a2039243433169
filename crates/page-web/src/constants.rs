// Front-end bootstrap and markup hooks

pub const LOG_LEVEL: log::Level = log::Level::Info;

// `data-toggle="<id>"` on a control makes a click toggle element `<id>`
pub const TOGGLE_ATTR: &str = "data-toggle";
