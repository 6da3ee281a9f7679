
pub mod tools;
pub mod emotion_scores_tool;

use anyhow::{bail, Context, Result};
use aws_sdk_bedrockruntime::types::{SpecificToolChoice, ToolChoice};
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{ContentBlock, Message, SystemContentBlock, Tool, ToolConfiguration, ToolInputSchema, ToolSpecification, ConversationRole::User};
use aws_sdk_bedrockruntime::operation::converse::ConverseOutput;
use emotion_scores_tool::get_emotion_scores_tool_definition;
use tracing::{debug, warn};

use tools::ToValue;
use crate::{env_keys::CHAT_MODEL, utilities::env_or_default};
use super::common_structs::{EmotionScoreSet, EmotionScores};


#[derive(Debug, Clone)]
pub struct BedrockService {
    client: Client,
    chat_model_id: String,
}

impl BedrockService {
    pub fn new(client: &aws_sdk_bedrockruntime::Client) -> Self {
        Self {
            client: client.to_owned(),
            chat_model_id: env_or_default(CHAT_MODEL, "")
        }
    }

    pub async fn get_emotion_scores(&self, text: &str) -> Result<EmotionScoreSet> {
        if self.chat_model_id.is_empty() {
            bail!("{} is not configured", CHAT_MODEL);
        }

        let tool_definition = get_emotion_scores_tool_definition()?;
        let emotion_scores_tool = Tool::ToolSpec(
            ToolSpecification::builder()
                .name(&tool_definition.name)
                .description(&tool_definition.description)
                .input_schema(ToolInputSchema::Json(tool_definition.schema))
                .build()?
        );

        let tool_config = ToolConfiguration::builder()
            .set_tools(Some(vec![emotion_scores_tool]))
            .tool_choice(ToolChoice::Tool(SpecificToolChoice::builder().name(&tool_definition.name).build()?))
            .build()?;

        let system_prompt = format!("
            You will be acting as an emotion detector.
            You are an expert at reading emotions within short statements.
            The target text will be surrounded by <text></text>.
            Score anger, disgust, fear, joy and sadness, each from 0.0 to 1.0.
            You have to use {} to print out the score for each emotion.
        ", tool_definition.name);

        let message = Message::builder()
            .role(User)
            .content(ContentBlock::Text(format!("<text>{}</text>", text)))
            .build()?;

        let response = self.send(&system_prompt, vec![message], Some(tool_config)).await?;

        debug!("response: {:?}", response);
        let scores = self.process_emotion_score_output(response, &tool_definition.name)?;
        Ok(EmotionScoreSet::classified(scores))
    }


    fn process_emotion_score_output(&self, response: ConverseOutput, tool_name: &str) -> Result<EmotionScores> {
        let output = response.output.context("Error getting output")?;
        let message = match output.as_message() {
            Ok(message) => message.to_owned(),
            Err(output) => {
                bail!("Converse output is not message: {:?}", output)
            },
        };

        scores_from_contents(message.content, tool_name)
    }


    async fn send(&self, system_prompt: &str, messages: Vec<Message>, tool_config: Option<ToolConfiguration>) -> Result<ConverseOutput> {
        let builder = self.client
            .converse()
            .model_id(&self.chat_model_id)
            .system(SystemContentBlock::Text(system_prompt.to_owned()))
            .set_messages(Some(messages))
            .set_tool_config(tool_config);

        let response = builder
            .send()
            .await?;
        Ok(response)
    }

}


// first tool use block named `tool_name` whose input decodes as scores
fn scores_from_contents(contents: Vec<ContentBlock>, tool_name: &str) -> Result<EmotionScores> {
    for content in contents {
        let tool_use = match content.as_tool_use() {
            Ok(tool_use) => tool_use,
            Err(block) => {
                debug!("Block: {:?} is not tool use.", block);
                continue;
            },
        };

        if tool_use.name() != tool_name {
            continue;
        }
        let input = tool_use.input().to_value();
        match serde_json::from_value::<EmotionScores>(input) {
            Ok(scores) if !scores.is_in_range() => {
                warn!("tool input scores out of range: {:?}", scores);
                continue;
            },
            Ok(scores) => {
                debug!("tool use. name: {}, input: {:?}", tool_name, scores);
                return Ok(scores);
            },
            Err(error) => {
                warn!("error getting scores from tool input: {}.", error);
                continue;
            },
        };
    }

    bail!("Error getting emotion scores")
}
