pub mod assistant_llm;
pub mod emotion_llm;
pub mod memory;

pub use assistant_llm::OpenAiAssistantAdapter;
pub use emotion_llm::OpenAiEmotionAdapter;
pub use memory::MemStorage;
