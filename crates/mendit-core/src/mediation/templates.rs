//! Template banks for generated mediation content.
//!
//! Every lookup takes the raw tag string and resolves it with an explicit
//! fallback order, so unknown tones or relationships degrade to the
//! compassionate / `other` banks instead of failing.
//!
//! Peace-plan fallback order:
//! 1. exact (tone, relationship) entry
//! 2. compassionate / other
//!
//! The peace-plan bank has no `colleagues` column, so colleagues always land
//! on step 2.

use mendit_types::tags::{Relationship, Tone};

/// Opening clause of each person's summary, by tone.
pub fn summary_templates(tone: &str) -> &'static [&'static str; 3] {
    match resolve_tone(tone) {
        Tone::Funny => &[
            "seems to be channeling their inner drama queen/king about",
            "is basically saying they feel like a misunderstood protagonist in",
            "appears to have strong feelings (and possibly strong coffee) about",
        ],
        Tone::Compassionate => &[
            "is feeling deeply hurt and wants to be understood about",
            "is expressing pain and seeking connection around",
            "feels vulnerable and needs support regarding",
        ],
        Tone::Direct => &[
            "clearly states their position on",
            "directly addresses their concerns about",
            "wants resolution regarding",
        ],
        Tone::Formal => &[
            "has articulated their perspective concerning",
            "has presented their viewpoint regarding",
            "has outlined their position on",
        ],
    }
}

/// Likely misunderstandings, by relationship.
pub fn misunderstandings(relationship: &str) -> &'static [&'static str; 3] {
    match resolve_relationship(relationship) {
        Relationship::Couple => &[
            "Different love languages causing communication gaps",
            "Assumptions about intentions without direct communication",
            "Past unresolved issues coloring current situations",
        ],
        Relationship::Friends => &[
            "Different expectations about friendship boundaries",
            "Miscommunication about time and priorities",
            "Assumptions about loyalty and support",
        ],
        Relationship::Family => &[
            "Generational differences in communication styles",
            "Unspoken expectations and traditional roles",
            "Past family dynamics affecting current relationships",
        ],
        Relationship::Colleagues => &[
            "Different work styles and priorities",
            "Unclear role boundaries and responsibilities",
            "Professional stress affecting interpersonal relations",
        ],
        Relationship::Other => &[
            "Different communication preferences",
            "Misaligned expectations",
            "Lack of clear boundaries",
        ],
    }
}

/// Common ground both sides share, by relationship.
pub fn shared_themes(relationship: &str) -> &'static [&'static str; 3] {
    match resolve_relationship(relationship) {
        Relationship::Couple => &[
            "Both want to feel loved and appreciated",
            "Both value the relationship and want it to work",
            "Both are struggling with effective communication",
        ],
        Relationship::Friends => &[
            "Both value the friendship deeply",
            "Both want to feel respected and understood",
            "Both are dealing with external pressures",
        ],
        Relationship::Family => &[
            "Both love each other despite the conflict",
            "Both want family harmony",
            "Both are carrying emotional baggage from the past",
        ],
        Relationship::Colleagues => &[
            "Both want to succeed professionally",
            "Both are under workplace pressure",
            "Both want a respectful work environment",
        ],
        Relationship::Other => &[
            "Both want to be heard and understood",
            "Both care about the outcome",
            "Both are dealing with their own stresses",
        ],
    }
}

/// Peace plan for a tone/relationship pair, following the fallback order.
pub fn peace_plan(tone: &str, relationship: &str) -> &'static str {
    let exact = match (exact_tone(tone), exact_relationship(relationship)) {
        (Some(tone), Some(relationship)) => peace_plan_entry(tone, relationship),
        _ => None,
    };
    exact.unwrap_or(COMPASSIONATE_OTHER)
}

/// Mediator replies in a live session, by tone.
pub fn ai_responses(tone: &str) -> &'static [&'static str; 3] {
    match resolve_tone(tone) {
        Tone::Funny => &[
            "I hear you both, and I'm sensing some strong feelings here. Let's take a breath and remember we're all just humans trying to figure things out! 😊",
            "That's a valid point! Now, let's see if we can find some common ground - maybe somewhere between 'I'm right' and 'you're wrong'? 😉",
            "I appreciate you sharing that. Sometimes conflicts are like tangled headphones - frustrating, but usually solvable with patience! 🎧",
        ],
        Tone::Compassionate => &[
            "Thank you for sharing that with such honesty. I can hear the pain in your words, and I want you to know that your feelings are completely valid.",
            "I'm sensing a lot of hurt here, and that's okay. Healing takes time, and you're both being so brave by having this conversation.",
            "What I'm hearing is that you both care deeply about this relationship. That love, even when it's complicated, is something beautiful to build on.",
        ],
        Tone::Direct => &[
            "Let me reflect back what I'm hearing: you both have specific concerns that need to be addressed. Let's focus on solutions.",
            "I notice some key issues emerging. Let's tackle them one by one and find practical ways forward.",
            "You've both made important points. Now let's identify the specific actions needed to resolve this.",
        ],
        Tone::Formal => &[
            "I acknowledge the perspectives that have been shared. Let us proceed to identify the core issues and potential resolutions.",
            "Thank you for your contributions to this discussion. I believe we can establish a framework for moving forward constructively.",
            "Based on the information provided, I suggest we focus on developing a structured approach to address these concerns.",
        ],
    }
}

/// Bank keys are the stored tags verbatim: no trimming, no case folding.
fn exact_tone(tag: &str) -> Option<Tone> {
    Tone::ALL.into_iter().find(|tone| tone.as_str() == tag)
}

fn exact_relationship(tag: &str) -> Option<Relationship> {
    Relationship::ALL
        .into_iter()
        .find(|relationship| relationship.as_str() == tag)
}

fn resolve_tone(tone: &str) -> Tone {
    exact_tone(tone).unwrap_or(Tone::Compassionate)
}

fn resolve_relationship(relationship: &str) -> Relationship {
    exact_relationship(relationship).unwrap_or(Relationship::Other)
}

const COMPASSIONATE_OTHER: &str = "🌺 The Compassionate Connection Method:\n\n1. Approach each other with curiosity rather than judgment\n2. Practice active listening and emotional validation\n3. Focus on shared humanity and common needs\n4. Create safe spaces for vulnerable communication\n5. Prioritize emotional healing alongside practical solutions\n6. Regular compassionate check-ins";

fn peace_plan_entry(tone: Tone, relationship: Relationship) -> Option<&'static str> {
    use Relationship::*;
    use Tone::*;

    let plan = match (tone, relationship) {
        (_, Colleagues) => return None,

        (Funny, Couple) => "🎭 The Comedy Peace Plan:\n\n1. Implement the '24-hour rule' - no major relationship discussions until you've both had coffee and snacks\n2. Create a 'drama jar' - every time someone gets overly dramatic, contribute $1 to your joint fun fund\n3. Weekly 'appreciation roasts' - lovingly make fun of each other's quirks while also sharing what you adore\n4. Establish a 'time-out' signal (suggest silly dance moves) when things get too heated\n5. End arguments with a mandatory compliment about the other person",
        (Funny, Friends) => "🎪 The Friendship Comedy Hour:\n\n1. Create friendship 'terms of service' that you both agree to (including snack-sharing policies)\n2. Implement a 'drama scale' from 1-10 to help gauge when issues are actually serious\n3. Schedule monthly 'friendship maintenance' meetings (with pizza)\n4. Create inside jokes about your conflict styles\n5. Promise to call each other out lovingly when being ridiculous",
        (Funny, Family) => "🎨 The Family Sitcom Solution:\n\n1. Institute 'family meeting' rules (talking stick optional, snacks mandatory)\n2. Create family mottos about handling disagreements\n3. Implement a 'generational translation' system for different communication styles\n4. Schedule regular one-on-one time without distractions\n5. End family conflicts with shared memories or photo-looking sessions",
        (Funny, Other) => "🎪 The Universal Comedy Approach:\n\n1. Acknowledge that humans are beautifully ridiculous creatures\n2. Create ground rules for respectful disagreement\n3. Implement regular check-ins with a touch of humor\n4. Focus on solutions rather than blame\n5. Remember that most conflicts stem from wanting to be understood",

        (Compassionate, Couple) => "💗 The Heart-Centered Healing Plan:\n\n1. Practice daily gratitude sharing - three things you appreciate about each other\n2. Create emotional safety by validating feelings before problem-solving\n3. Implement gentle touch or eye contact during difficult conversations\n4. Schedule weekly relationship nurturing time without distractions\n5. Use 'I feel' statements and listen with the intent to understand, not respond\n6. Create rituals for reconnection after conflicts",
        (Compassionate, Friends) => "🌸 The Friendship Restoration Path:\n\n1. Acknowledge the value and history of your friendship\n2. Practice vulnerable sharing about your individual struggles\n3. Create space for both people to feel heard without judgment\n4. Focus on emotional healing before practical solutions\n5. Plan meaningful activities that reconnect you to why you're friends\n6. Regular check-ins about how the friendship is feeling",
        (Compassionate, Family) => "🕊 The Family Harmony Approach:\n\n1. Honor the love that exists beneath the conflict\n2. Practice intergenerational empathy and understanding\n3. Create new family traditions that bring joy\n4. Allow space for individual growth within family bonds\n5. Focus on healing old wounds with patience and compassion\n6. Regular family appreciation circles",
        (Compassionate, Other) => COMPASSIONATE_OTHER,

        (Direct, Couple) => "🎯 The Straight-Talk Relationship Plan:\n\n1. Schedule weekly 20-minute relationship meetings to address issues promptly\n2. Use clear, specific language about needs and boundaries\n3. Implement a 'no beating around the bush' policy for important conversations\n4. Create action items with deadlines for relationship improvements\n5. Address problems immediately rather than letting them fester\n6. Regular relationship health assessments",
        (Direct, Friends) => "⚡ The No-Nonsense Friendship Fix:\n\n1. Have honest conversations about friendship expectations\n2. Set clear boundaries and communicate them directly\n3. Address issues within 48 hours of them arising\n4. Be specific about what you need from each other\n5. Create accountability systems for maintaining the friendship\n6. Regular friendship status updates",
        (Direct, Family) => "🔧 The Family Problem-Solving Protocol:\n\n1. Establish clear family communication rules and stick to them\n2. Address generational differences head-on with specific examples\n3. Create structured family meetings with agendas\n4. Set measurable goals for family relationship improvement\n5. Implement immediate feedback systems\n6. Regular family efficiency reviews",
        (Direct, Other) => "⚙️ The Direct Resolution Method:\n\n1. Clearly define the problem and desired outcomes\n2. Set specific timelines for resolution\n3. Create measurable action steps\n4. Implement regular progress check-ins\n5. Address resistance or obstacles immediately\n6. Maintain focus on practical solutions",

        (Formal, Couple) => "📋 The Structured Relationship Agreement:\n\n1. Establish formal communication protocols for addressing relationship concerns\n2. Implement regular relationship review meetings with documented outcomes\n3. Create a relationship charter outlining shared values and expectations\n4. Develop conflict resolution procedures with clear steps\n5. Maintain relationship documentation for tracking progress\n6. Regular formal relationship assessments",
        (Formal, Friends) => "📊 The Friendship Framework:\n\n1. Develop a friendship charter outlining mutual expectations\n2. Establish formal communication channels for addressing concerns\n3. Implement structured check-in procedures\n4. Create documented agreements about friendship boundaries\n5. Develop clear protocols for conflict resolution\n6. Regular friendship performance reviews",
        (Formal, Family) => "📑 The Family Governance Structure:\n\n1. Establish family bylaws for communication and conflict resolution\n2. Implement structured family meeting procedures\n3. Create formal roles and responsibilities within family dynamics\n4. Develop documented family values and principles\n5. Establish clear protocols for addressing family disputes\n6. Regular family governance reviews",
        (Formal, Other) => "📋 The Professional Resolution Protocol:\n\n1. Establish formal communication frameworks\n2. Implement structured problem-solving methodologies\n3. Create documented agreements and expectations\n4. Develop clear escalation procedures\n5. Maintain professional boundaries and protocols\n6. Regular formal review processes",
    };
    Some(plan)
}
