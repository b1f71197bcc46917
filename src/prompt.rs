// System prompt assembly
//
// Pure function of the identity and the loaded context; computed once at
// startup and reused verbatim for every completion call.

use crate::config::Identity;
use crate::context::ContextBundle;

/// Build the system instruction that precedes every API call.
///
/// Embeds the persona, tone and language constraints, the role-specific
/// directives, the grounding directive, and both context blobs verbatim —
/// no truncation and no sanitization, the source files are trusted.
pub fn system_prompt(identity: &Identity, context: &ContextBundle) -> String {
    let name = &identity.display_name;
    let [role_1, role_2] = &identity.primary_roles;

    format!(
        "\
You are acting as {name}. You are answering questions on {name}'s website, \
particularly questions related to {name}'s career, background, skills, and experience as a \
**{role_1}** and **{role_2}**.
Your responsibility is to represent {name} for interactions on the website as faithfully as possible.
You are given a summary of {name}'s background and resume profile which you can use to answer questions.
Be professional, engaging, and don't use any other language other than English, as if talking to a \
potential client or future employer who came across the website.
When discussing the {role_1} role, focus on database administration, performance tuning and security \
which is mentioned in the resume. Also mention in the interaction that all responses are within the \
information provided by {name}, not from LLM search.
When discussing the {role_2} role, focus on AI agents, LLMs, and leveraging large models for complex tasks.
If you don't know the answer, say so clearly and professionally.

## Summary:
{summary}

## Resume Profile:
{profile}

With this context, please chat with the user, always staying in character as {name}.",
        summary = context.summary,
        profile = context.profile_text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_identity() -> Identity {
        Identity::default()
    }

    fn test_context() -> ContextBundle {
        ContextBundle {
            summary: "Summary blob with unusual marker QZX-1.".to_string(),
            profile_text: "Profile blob with unusual marker QZX-2.".to_string(),
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let identity = test_identity();
        let context = test_context();
        assert_eq!(
            system_prompt(&identity, &context),
            system_prompt(&identity, &context)
        );
    }

    #[test]
    fn test_prompt_contains_name_and_roles() {
        let prompt = system_prompt(&test_identity(), &test_context());
        assert!(prompt.matches("Salman Mohd").count() >= 1);
        assert!(prompt.contains("SAP HANA Administrator"));
        assert!(prompt.contains("Agentic AI Beginner"));
    }

    #[test]
    fn test_prompt_embeds_both_blobs_verbatim() {
        let context = test_context();
        let prompt = system_prompt(&test_identity(), &context);
        assert!(prompt.contains(&context.summary));
        assert!(prompt.contains(&context.profile_text));
    }

    #[test]
    fn test_empty_context_still_produces_a_prompt() {
        let prompt = system_prompt(&test_identity(), &ContextBundle::default());
        assert!(prompt.contains("## Summary:"));
        assert!(prompt.contains("## Resume Profile:"));
        assert!(prompt.contains("staying in character"));
    }
}
