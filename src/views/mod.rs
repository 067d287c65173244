pub mod answer;
pub mod chat;
pub mod faqs;
pub mod welcome;

pub use answer::AnswerBubble;
pub use chat::ChatView;
pub use faqs::QuickFaqs;
pub use welcome::WelcomeCard;
