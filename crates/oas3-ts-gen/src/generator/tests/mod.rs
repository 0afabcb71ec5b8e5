mod delete_operations;
mod orchestrator;
mod support;
