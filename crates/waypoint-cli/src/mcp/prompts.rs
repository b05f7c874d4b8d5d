//! Prompt templates for MCP server

/// Argument definition for a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplateArg {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Definition of a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub description: String,
    pub template: String,
    pub arguments: Vec<PromptTemplateArg>,
}

/// Get predefined prompt templates for roadmap generation
pub fn get_prompt_templates() -> Vec<PromptTemplate> {
    vec![PromptTemplate {
        name: "roadmap".to_string(),
        description: "Produce a learning roadmap JSON document for a topic, ready to feed into the generate_roadmap tool".to_string(),
        template: r#"You are **Waypoint Planner**, expert at designing structured learning roadmaps.

# Topic
{topic}

# Your Task
Produce a learning roadmap for this topic as a single JSON document, then store it with the `generate_roadmap` tool.

# Output Format
Respond with exactly one JSON object using this shape:

```json
{
  "title": "Concise roadmap title",
  "description": "One or two sentences describing the journey",
  "estimatedTotalDuration": "e.g. 8 weeks",
  "difficulty": "beginner | intermediate | advanced",
  "category": "e.g. programming, music, language",
  "nodes": [
    {
      "id": "step_1",
      "title": "[Action Verb] [Specific Target]",
      "description": "What to learn and why it matters at this point",
      "duration": "e.g. 1 week",
      "type": "milestone | task | resource",
      "resources": ["https://example.com/guide"]
    }
  ],
  "edges": [
    {"source": "step_1", "target": "step_2", "label": "Then"}
  ]
}
```

## Quality Guidelines

Each step should be:
- **Atomic**: One clear learning objective
- **Ordered**: Prerequisites come before the steps that need them
- **Concrete**: Names specific skills, not vague themes
- **Scoped**: Has a realistic duration estimate

The complete roadmap should have:
- 5-12 well-defined steps
- Milestones marking major checkpoints
- At least one resource per step where good ones exist
- Difficulty matched to someone starting from scratch on this topic

## Storing the Roadmap
Call `generate_roadmap` with the entire JSON document as `raw_response`. The tool repairs minor formatting problems, but aim for valid JSON."#.to_string(),
        arguments: vec![PromptTemplateArg {
            name: "topic".to_string(),
            description: "The topic or skill to build a learning roadmap for".to_string(),
            required: true,
        }],
    }]
}
