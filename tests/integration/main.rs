mod support;

mod attempt_limits;
mod exam_flow;
mod navigation;
mod obfuscation;
mod progress_statistics;
mod timeout_and_pause;
