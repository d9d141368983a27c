//! Response envelope passed between task producers and consumers.

use serde::{Deserialize, Serialize};

/// Command or status code carried with a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandCode {
    TaskExecuteRequest,
    TaskExecuteAck,
    TaskExecuteResponse,
    TaskKillRequest,
    TaskKillResponse,
}

/// Task request payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskRequest {
    pub task_id: i64,
    pub task_name: String,
    pub task_type: String,
    /// Serialized task parameters.
    #[serde(default)]
    pub parameter: Option<String>,
    #[serde(default)]
    pub execute_host: Option<String>,
}

/// Pairs a command code with a task request. Both halves can be replaced
/// after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResponseContext {
    command_code: CommandCode,
    task_request: TaskRequest,
}

impl TaskResponseContext {
    pub fn new(command_code: CommandCode, task_request: TaskRequest) -> Self {
        Self {
            command_code,
            task_request,
        }
    }

    pub fn command_code(&self) -> CommandCode {
        self.command_code
    }

    pub fn set_command_code(&mut self, command_code: CommandCode) {
        self.command_code = command_code;
    }

    pub fn task_request(&self) -> &TaskRequest {
        &self.task_request
    }

    pub fn set_task_request(&mut self, task_request: TaskRequest) {
        self.task_request = task_request;
    }

    /// Split the envelope into its parts.
    pub fn into_parts(self) -> (CommandCode, TaskRequest) {
        (self.command_code, self.task_request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: i64) -> TaskRequest {
        TaskRequest {
            task_id: id,
            task_name: format!("task-{id}"),
            task_type: "quality_check".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_setters_are_independent() {
        let mut ctx = TaskResponseContext::new(CommandCode::TaskExecuteRequest, request(1));

        ctx.set_command_code(CommandCode::TaskExecuteAck);
        assert_eq!(ctx.command_code(), CommandCode::TaskExecuteAck);
        assert_eq!(ctx.task_request().task_id, 1);

        ctx.set_task_request(request(2));
        assert_eq!(ctx.command_code(), CommandCode::TaskExecuteAck);
        assert_eq!(ctx.task_request().task_name, "task-2");
    }

    #[test]
    fn test_serialized_shape() {
        let ctx = TaskResponseContext::new(CommandCode::TaskKillResponse, request(9));
        let value = serde_json::to_value(&ctx).unwrap();
        assert_eq!(value["command_code"], "TASK_KILL_RESPONSE");
        assert_eq!(value["task_request"]["task_id"], 9);

        let (code, req) = ctx.into_parts();
        assert_eq!(code, CommandCode::TaskKillResponse);
        assert_eq!(req.task_id, 9);
    }
}
