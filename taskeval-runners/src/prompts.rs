//! Prompt construction for the support action extraction task.

const BASE_INSTRUCTION: &str = "You are an assistant that reads a customer support style request
and maps it to a structured JSON action for a ticketing system.

Return a single JSON object with exactly these fields:
- \"intent\": short string label for the main problem or request.
- \"priority\": one of \"low\", \"medium\", \"high\".
- \"requires_human\": true or false.
- \"target_system\": short string for the system that should handle it, for example \"billing\", \"network\", \"account\", \"general\".
- \"sla_hours\": integer number of hours for the response time target.

Do not include any explanation. Do not wrap in markdown. Respond with JSON only.";

/// Build the instruction prompt for one task, with the optional account
/// context block ahead of the customer request.
pub fn support_action_prompt(input_text: &str, context: Option<&str>) -> String {
    let ctx = match context {
        Some(context) => format!("Additional account context:\n{context}\n\n"),
        None => String::new(),
    };

    format!("{BASE_INSTRUCTION}\n\n{ctx}Customer request:\n{input_text}")
}
