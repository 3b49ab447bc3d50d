mod chat;
mod home;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use chat::ChatView;
pub use home::HomeView;
