use shared::{ContactRequest, ContactResponse};

use crate::domain::commands::support::{SubmitContactCommand, SubmitContactResult};

pub struct SupportMapper;

impl SupportMapper {
    pub fn to_command(request: ContactRequest) -> SubmitContactCommand {
        SubmitContactCommand {
            name: request.name,
            email: request.email,
            subject: request.subject,
            message: request.message,
        }
    }

    pub fn to_response(result: SubmitContactResult) -> ContactResponse {
        ContactResponse {
            success: true,
            message: result.success_message,
            request_id: result.request_id,
        }
    }
}
