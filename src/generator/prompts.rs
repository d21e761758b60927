// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt templates and per-operation generation budgets

use std::time::Duration;

use crate::llm::CompletionParams;

/// Roadmaps favor determinism
pub const ROADMAP_PARAMS: CompletionParams =
    CompletionParams::new(2500, 0.55, Duration::from_secs(60));

/// Articles are long-form and favor variety
pub const ARTICLE_PARAMS: CompletionParams =
    CompletionParams::new(6000, 0.7, Duration::from_secs(120));

pub const CHAT_PARAMS: CompletionParams =
    CompletionParams::new(1500, 0.6, Duration::from_secs(60));

/// Instruction asking for a JSON array of numbered, indented roadmap entries
///
/// `existing` is an outline the model should build on, if one was found.
pub fn roadmap_prompt(topic: &str, existing: Option<&[String]>) -> String {
    let mut prompt = format!(
        r#"You are an expert learning path designer.

Design a structured and exhaustive learning roadmap for the topic "{topic}".
The roadmap must:
- Be a hierarchy of topics and subtopics.
- Include the concepts, techniques and any other material essential for proficiency.
- Progress step by step, from the basics to advanced topics.
- Cover all aspects of the topic.
- Be a JSON array of strings, where each string is a numbered topic or subtopic.
- Indent subtopics with leading spaces so they stand apart from main topics.
- Contain between 8 and 20 items, depending on the complexity of the topic.
- If the topic is inappropriate, invalid, or cannot have a meaningful roadmap, be a JSON object with an "error" key holding a short explanation instead.
- Contain nothing outside the JSON: no commentary, no explanations, no code fences.

Example output for a valid topic:
[
    "1. Introduction to {topic}",
    "2. Core Concepts",
    "   2.1 Subtopic 1",
    "   2.2 Subtopic 2",
    "3. Advanced Techniques",
    "   3.1 Subtopic 3"
]

Example output for an invalid topic:
{{
    "error": "The topic '{topic}' is inappropriate or cannot have a meaningful roadmap."
}}

Topic: {topic}"#
    );

    if let Some(outline) = existing.filter(|o| !o.is_empty()) {
        prompt.push_str(
            "\n\nTake into account the existing outline below, but focus on topics it does not \
             cover yet and fill the gaps it leaves.\nExisting outline:\n",
        );
        prompt.push_str(&outline.join("\n"));
    }

    prompt
}

/// Context block carrying web search snippets; empty when there are none
pub fn search_context(snippets: &[String]) -> String {
    if snippets.is_empty() {
        return String::new();
    }
    format!(
        "\n\nRelevant web search results:\n{}\n\n",
        snippets.join("\n")
    )
}

/// Instruction for a long-form Markdown article about one roadmap section
pub fn article_prompt(
    main_topic: &str,
    section: &str,
    roadmap: &[String],
    search_context: &str,
) -> String {
    let roadmap_text = if roadmap.is_empty() {
        "(no roadmap provided)".to_string()
    } else {
        roadmap.join("\n")
    };

    format!(
        r#"You are an expert educator and content creator.

Write a detailed, tutorial-style article about "{section}".
This section is part of a larger learning roadmap on "{main_topic}". The full roadmap is:
{roadmap_text}

Scope:
1. Cover only "{section}". Other roadmap entries have their own articles.
2. You may mention other roadmap entries where it helps orientation, but do not explain them or give away their details.
3. Start from the basics of "{section}" and progress step by step to intermediate and advanced material.
4. Assume the reader has followed the roadmap up to this section and no further.

Format (Markdown):
- Structure the article with headings and subheadings (#, ##, ###).
- Use lists, code blocks and math notation ($...$ or $$...$$) where they help.
- Include practical examples, analogies or code where appropriate.
- End with a "Further Reading" section linking to real, existing articles, documentation or other text resources about "{section}". Never use placeholder or invented links; leave a resource out if you are not sure of its URL.
{search_context}
Make sure the content flows logically from simple to complex."#
    )
}

/// Instruction for answering a reader's question about the material in view
pub fn chat_prompt(query: &str, context: &str) -> String {
    let context = if context.trim().is_empty() {
        "(no additional context)"
    } else {
        context
    };

    format!(
        r#"You are a patient tutor helping a learner work through study material.

Use the material below as your primary reference. If the question goes beyond it, answer from general knowledge and say so briefly.

Material:
{context}

Question: {query}

Answer clearly and concisely in Markdown."#
    )
}
