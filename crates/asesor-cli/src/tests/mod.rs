mod client;
mod detail;
mod forms;
mod logger;
mod session;
