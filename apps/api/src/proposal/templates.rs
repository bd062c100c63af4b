// Canned building blocks for template synthesis.
// Paragraph joins ("\n\n") are added by the synthesizer, not stored here.

pub const OPENING_PROFESSIONAL: &str = "I'm writing to express my interest in your project. \
    After reviewing your requirements, I believe my experience makes me an excellent candidate.";

pub const OPENING_CONVERSATIONAL: &str = "Hey there! I came across your job posting and I'm \
    really excited about the opportunity to work with you on this project.";

pub const OPENING_TECHNICAL: &str = "Upon analyzing your technical requirements, I'd like to \
    present my approach to delivering an efficient and scalable solution for your project.";

/// Used for any tone outside the selectable set.
pub const OPENING_GENERIC: &str = "Thank you for posting this job opportunity. \
    I'm interested in working with you on this project.";

pub const SKILLS_SECTION: &str = "I have extensive experience in this field, having successfully \
completed several similar projects. Key highlights of my background include:

• Over 5 years of expertise in web development and design
• Proficiency in modern frameworks and technologies
• A portfolio of successful projects with satisfied clients
• Strong communication skills and responsive work ethic";

pub const APPROACH_SECTION: &str = "My approach to your project would be methodical and \
    client-focused. I would begin with a thorough analysis of your requirements, followed by \
    regular updates throughout the development process to ensure alignment with your vision.";

pub const TIMELINE_SECTION: &str = "Based on your requirements, I estimate this project would \
    take approximately 2-3 weeks to complete, with the first deliverable ready within 3-4 days \
    of project commencement.";

/// Replace `{instructions}` before use.
pub const CUSTOM_SECTION_TEMPLATE: &str = "Regarding your specific requirements: {instructions}";

/// Replace `{platform}` before use.
pub const CLOSING_TEMPLATE: &str = "I would be happy to discuss this project in more detail. \
Please feel free to message me on {platform} if you have any questions or would like to schedule a call.

Looking forward to potentially working together.

Best regards,
[Your Name]";
