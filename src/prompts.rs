//! Analysis prompt templates.
//!
//! Each template is sent as the system message of the completion request.
//! Templates contain bracketed placeholders (`[mention ...]`)
//! that the user fills in by hand in the prompt editor before submitting.
//! They are never parsed or substituted here: whatever text is in the
//! editor at submit time is what the model receives.

/// One entry of the prompt catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    /// Label shown next to the radio button.
    pub label: &'static str,
    /// Template text that seeds the prompt editor.
    pub text: &'static str,
}

pub const SUMMARIZATION: &str = "You are an expert analyst. I am [mention the problem you’re facing in detail with context]. Analyze the attached document thoroughly and provide a concise summary. Ensure the summary captures the main points, key arguments, supporting evidence, and the conclusions drawn by the author. Maintain the original context and intent while keeping the summary brief. I want you to [mention how you want the output in detail with examples].";

pub const SENTIMENT_ANALYSIS: &str = "You are an expert analyst. I am [mention the problem you’re facing in detail with context]. Read the attached document and perform a sentiment analysis. Determine if the overall sentiment is positive, negative, or neutral. Identify specific sentences or paragraphs that exemplify this sentiment. Additionally, explain how the choice of words, tone, and context contribute to the identified sentiment. I want you to [mention how you want the output in detail with examples].";

pub const KEY_THEMES_AND_TOPICS_IDENTIFICATION: &str = "You are an expert analyst. I am [mention the problem you’re facing in detail with context]. Examine the attached document and identify the primary themes and topics discussed. List each theme or topic along with a brief explanation. Provide relevant excerpts from the text that illustrate each identified theme or topic. Ensure that all significant themes and topics are covered comprehensively. I want you to [mention how you want the output in detail with examples].";

pub const TONE_AND_STYLE_ANALYSIS: &str = "You are an expert analyst. I am [mention the problem you’re facing in detail with context]. Analyze the tone and style of the attached document. Describe the tone (e.g., formal, informal, persuasive, informative) and the style (e.g., academic, conversational, technical). Provide multiple examples from the text to support your analysis. Additionally, explain how the tone and style contribute to the overall effectiveness of the document. I want you to [mention how you want the output in detail with examples].";

pub const ARGUMENT_ANALYSIS: &str = "You are an expert business coach. I am [mention the problem you are facing in detail with context]. Develop a comprehensive branding strategy for my new digital product in the [specific niche]. Include ideas for the product name that reflect its value and appeal to the target audience, logo design concepts that align with the brand identity, brand voice and tone guidelines, and key messaging that highlights the product’s unique benefits and differentiators. Check my attached document for [mention reference]. I want you to [mention how you want the output in detail with examples].";

pub const FACT_CHECKING: &str = "You are an expert analyst. I am [mention the problem you’re facing in detail with context]. Analyze the attached document and identify all factual claims made by the author. Verify the accuracy of these claims using reliable external sources. For each claim, provide a brief report on its validity, including citations from your sources. Highlight any discrepancies or confirmations found during the verification process. I want you to [mention how you want the output in detail with examples].";

pub const COMPARISON_AND_CONTRAST: &str = "You are an expert analyst. I am [mention the problem you’re facing in detail with context]. Compare and contrast the key points and perspectives presented in the attached document. Highlight the similarities and differences in their arguments, evidence, and conclusions. For each comparison point, provide specific excerpts from both documents. Summarize the overall comparative analysis. I want you to [mention how you want the output in detail with examples].";

pub const PERSUASIVE_TECHNIQUES_ANALYSIS: &str = "You are an expert analyst. I am [mention the problem you’re facing in detail with context]. Examine the attached document and identify any persuasive techniques used by the author, such as appeals to emotion, logical reasoning, or use of evidence. For each technique identified, provide specific examples from the text and assess their effectiveness. Additionally, explain how these techniques contribute to the overall persuasive power of the document. I want you to [mention how you want the output in detail with examples].";

pub const STRUCTURE_AND_ORGANIZATION_ANALYSIS: &str = "You are an expert analyst. I am [mention the problem you’re facing in detail with context]. Analyze the structure and organization of the attached document. Describe how the document is structured, including sections such as introduction, body, and conclusion. Evaluate the effectiveness of this structure in conveying the author’s message. Provide examples from the text that illustrate the organization and flow of information. I want you to [mention how you want the output in detail with examples].";

pub const CRITICAL_ANALYSIS: &str = "You are an expert analyst. I am [mention the problem you’re facing in detail with context]. Perform a critical analysis of the attached document. Identify any biases, assumptions, or gaps in the author’s reasoning. Provide specific examples from the text to support your critique. Additionally, suggest ways in which the document could be improved to address these issues. Summarize your overall critical assessment. I want you to [mention how you want the output in detail with examples].";

const PROMPTS: &[PromptTemplate] = &[
    PromptTemplate {
        label: "Summarization Prompt",
        text: SUMMARIZATION,
    },
    PromptTemplate {
        label: "Sentiment Analysis Prompt",
        text: SENTIMENT_ANALYSIS,
    },
    PromptTemplate {
        label: "Key Themes and Topics Identification Prompt",
        text: KEY_THEMES_AND_TOPICS_IDENTIFICATION,
    },
    PromptTemplate {
        label: "Tone and Style Analysis Prompt",
        text: TONE_AND_STYLE_ANALYSIS,
    },
    PromptTemplate {
        label: "Argument Analysis Prompt",
        text: ARGUMENT_ANALYSIS,
    },
    PromptTemplate {
        label: "Fact-Checking Prompt",
        text: FACT_CHECKING,
    },
    PromptTemplate {
        label: "Comparison and Contrast Prompt",
        text: COMPARISON_AND_CONTRAST,
    },
    PromptTemplate {
        label: "Persuasive Techniques Analysis Prompt",
        text: PERSUASIVE_TECHNIQUES_ANALYSIS,
    },
    PromptTemplate {
        label: "Structure and Organization Analysis Prompt",
        text: STRUCTURE_AND_ORGANIZATION_ANALYSIS,
    },
    PromptTemplate {
        label: "Critical Analysis Prompt",
        text: CRITICAL_ANALYSIS,
    },
];

/// All templates, in display order.
pub fn all() -> &'static [PromptTemplate] {
    PROMPTS
}

/// The template preselected when the page first loads.
pub fn default_prompt() -> &'static PromptTemplate {
    &PROMPTS[0]
}

/// Look up a template by its label.
pub fn resolve(label: &str) -> Option<&'static PromptTemplate> {
    PROMPTS.iter().find(|p| p.label == label)
}
