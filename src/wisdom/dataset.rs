//! The fixed reference dataset.
//!
//! Nine traditions, eleven philosophers, ten themes, six evidence entries and
//! twenty-six quotes. Built once per process by [`reference`]; every seed run and
//! every in-memory repository reads the same `&'static` copy.

use std::sync::OnceLock;

use crate::wisdom::types::{DatasetCounts, Evidence, Philosopher, Quote, Theme, Tradition};

/// A complete set of seedable records, in dependency order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub traditions: Vec<Tradition>,
    pub philosophers: Vec<Philosopher>,
    pub themes: Vec<Theme>,
    pub evidence: Vec<Evidence>,
    pub quotes: Vec<Quote>,
}

impl Dataset {
    /// Record counts, comparable with a repository's [`DatasetCounts`].
    pub fn counts(&self) -> DatasetCounts {
        DatasetCounts {
            traditions: self.traditions.len() as u64,
            philosophers: self.philosophers.len() as u64,
            themes: self.themes.len() as u64,
            evidence: self.evidence.len() as u64,
            quotes: self.quotes.len() as u64,
        }
    }
}

static REFERENCE: OnceLock<Dataset> = OnceLock::new();

/// The reference content shipped with the service.
pub fn reference() -> &'static Dataset {
    REFERENCE.get_or_init(|| Dataset {
        traditions: traditions(),
        philosophers: philosophers(),
        themes: themes(),
        evidence: evidence(),
        quotes: quotes(),
    })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn tradition(id: &str, name: &str, origin: &str, principles: &[&str], related: &[&str]) -> Tradition {
    Tradition {
        id: id.into(),
        name: name.into(),
        origin: origin.into(),
        core_principles: strings(principles),
        related_ids: strings(related),
    }
}

fn philosopher(
    id: &str,
    name: &str,
    tradition_id: &str,
    era: &str,
    bio: &str,
    teachings: &[&str],
) -> Philosopher {
    Philosopher {
        id: id.into(),
        name: name.into(),
        tradition_id: tradition_id.into(),
        era: era.into(),
        bio: bio.into(),
        key_teachings: strings(teachings),
    }
}

fn theme(id: &str, name: &str, description: &str, traditions: &[&str]) -> Theme {
    Theme {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        tradition_ids: strings(traditions),
    }
}

fn evidence_item(
    id: &str,
    title: &str,
    finding: &str,
    field: &str,
    source: &str,
    themes: &[&str],
) -> Evidence {
    Evidence {
        id: id.into(),
        title: title.into(),
        finding: finding.into(),
        field: field.into(),
        source: source.into(),
        theme_ids: strings(themes),
    }
}

fn quote(
    id: &str,
    text: &str,
    philosopher_id: &str,
    tradition_id: &str,
    source: &str,
    themes: &[&str],
    evidence: &[&str],
) -> Quote {
    Quote {
        id: id.into(),
        slug: None,
        title: None,
        text: text.into(),
        philosopher_id: philosopher_id.into(),
        tradition_id: tradition_id.into(),
        source: source.into(),
        summary: None,
        theme_ids: strings(themes),
        evidence_ids: strings(evidence),
    }
}

fn traditions() -> Vec<Tradition> {
    vec![
        tradition(
            "stoic",
            "Stoicism",
            "Greece, 3rd century BCE — Zeno of Citium",
            &[
                "Dichotomy of control: distinguish what is up to us from what is not",
                "Virtue (arete) is the sole good",
                "Live according to nature and reason (logos)",
                "Negative visualization (premeditatio malorum)",
                "The obstacle is the way",
            ],
            &["buddhist", "vedantic", "taoist"],
        ),
        tradition(
            "epicurean",
            "Epicureanism",
            "Greece, 4th century BCE — Epicurus",
            &[
                "Pleasure (ataraxia — tranquility) is the highest good",
                "Absence of pain (aponia) over active pleasure",
                "Fear of death is irrational",
                "Simple living and friendship are supreme",
                "Natural and necessary desires vs vain desires",
            ],
            &["stoic", "buddhist"],
        ),
        tradition(
            "cynic",
            "Cynicism",
            "Greece, 5th century BCE — Antisthenes, Diogenes of Sinope",
            &[
                "Virtue is the only good",
                "Reject all conventional desires: wealth, power, fame",
                "Live in agreement with nature",
                "Radical freedom through radical simplicity",
                "Parrhesia — fearless, shameless speech",
            ],
            &["stoic", "taoist", "buddhist"],
        ),
        tradition(
            "socratic",
            "Socratic Philosophy",
            "Greece, 5th century BCE — Socrates",
            &[
                "The unexamined life is not worth living",
                "I know that I know nothing (Socratic ignorance)",
                "Virtue is knowledge; no one errs willingly",
                "Dialectic questioning as path to truth",
                "Care of the soul above all else",
            ],
            &["stoic", "vedantic"],
        ),
        tradition(
            "buddhist",
            "Buddhism",
            "India, 5th century BCE — Siddhartha Gautama",
            &[
                "Four Noble Truths: suffering, its cause, its end, the path",
                "Impermanence (anicca) of all phenomena",
                "Non-self (anatta) — no fixed, separate self",
                "The Middle Way between asceticism and indulgence",
                "Mindfulness and meditation as liberation",
            ],
            &["stoic", "vedantic", "taoist"],
        ),
        tradition(
            "sufi",
            "Sufism",
            "Islamic world, 8th century CE — mystical tradition within Islam",
            &[
                "Fana — annihilation of the ego-self in the Divine",
                "Divine love as the supreme path",
                "The inner (batin) meaning beneath the outer (zahir)",
                "Zikr — remembrance of God through repetition",
                "The heart as the organ of spiritual perception",
            ],
            &["vedantic", "buddhist"],
        ),
        tradition(
            "vedantic",
            "Vedanta",
            "India, ~800 BCE onward — Upanishads, Shankara",
            &[
                "Atman (self) is Brahman (ultimate reality)",
                "The world of multiplicity is maya (illusion)",
                "Self-inquiry (Atma Vichara): Who am I?",
                "Liberation (moksha) through knowledge (jnana)",
                "Neti neti — not this, not this — via negativa",
            ],
            &["buddhist", "sufi", "stoic"],
        ),
        tradition(
            "taoist",
            "Taoism",
            "China, 6th century BCE — Lao Tzu",
            &[
                "The Tao that can be named is not the eternal Tao",
                "Wu wei — effortless action, non-forcing",
                "Harmony with the natural flow of things",
                "Simplicity (pu) — the uncarved block",
                "Yin-yang: complementary opposites",
            ],
            &["stoic", "buddhist", "cynic"],
        ),
        tradition(
            "krishnamurti",
            "Krishnamurti's Teaching",
            "India/Global, 20th century — Jiddu Krishnamurti",
            &[
                "Truth is a pathless land — no guru, no method",
                "The observer is the observed",
                "Freedom from the known",
                "Thought is the root of psychological suffering",
                "Choiceless awareness — observation without the observer",
            ],
            &["buddhist", "vedantic", "taoist"],
        ),
    ]
}

fn philosophers() -> Vec<Philosopher> {
    vec![
        philosopher(
            "epictetus",
            "Epictetus",
            "stoic",
            "50–135 CE",
            "Born a slave in Hierapolis. His master Epaphroditus broke his leg; Epictetus reportedly said 'I told you it would break.' Freed and taught in Nicopolis. Never wrote — his student Arrian recorded his Discourses and the Enchiridion.",
            &["Dichotomy of control", "Prohairesis (moral choice)", "Role ethics", "The discipline of desire, action, and assent"],
        ),
        philosopher(
            "marcus-aurelius",
            "Marcus Aurelius",
            "stoic",
            "121–180 CE",
            "Roman Emperor and philosopher-king. His private journal, Meditations, was never meant for publication — raw Stoic self-talk written during military campaigns on the Germanic frontier.",
            &["Memento mori", "Cosmopolitanism", "Impermanence of all things", "The inner citadel"],
        ),
        philosopher(
            "seneca",
            "Seneca",
            "stoic",
            "4 BCE–65 CE",
            "Roman statesman, dramatist, tutor to Nero. His Letters to Lucilius are among the most practical philosophical texts ever written. Forced to commit suicide by Nero; faced it with Stoic composure.",
            &["Shortness of life", "Premeditatio malorum", "Anger as temporary madness", "Voluntary discomfort"],
        ),
        philosopher(
            "epicurus",
            "Epicurus",
            "epicurean",
            "341–270 BCE",
            "Founded the Garden — a philosophical community open to women and slaves. Taught that philosophy's purpose is to alleviate suffering. Lived on bread, water, and cheese. 'Send me some cheese, that I may have a feast.'",
            &["Tetrapharmakos (four-part remedy)", "Death is nothing to us", "Friendship as highest pleasure", "Hierarchy of desires"],
        ),
        philosopher(
            "diogenes",
            "Diogenes of Sinope",
            "cynic",
            "412–323 BCE",
            "Lived in a ceramic jar in the Athenian agora. Carried a lantern in daylight 'looking for an honest man.' When Alexander the Great offered him anything, he said 'Stand out of my sunlight.' The original punk philosopher.",
            &["Radical self-sufficiency", "Cosmopolitanism", "Defiance of convention", "Living according to nature"],
        ),
        philosopher(
            "socrates",
            "Socrates",
            "socratic",
            "470–399 BCE",
            "Wrote nothing. Taught by questioning. Convicted of corrupting the youth of Athens and impiety. Drank hemlock serenely. His method — elenchus — remains the most powerful tool for exposing assumptions.",
            &["Socratic method", "Care of the soul", "Virtue as knowledge", "Socratic ignorance"],
        ),
        philosopher(
            "buddha",
            "Siddhartha Gautama (The Buddha)",
            "buddhist",
            "563–483 BCE",
            "Prince who renounced wealth after encountering old age, sickness, and death. Attained enlightenment under the Bodhi tree. Taught the Middle Way for 45 years. 'Be a lamp unto yourself.'",
            &["Four Noble Truths", "Eightfold Path", "Dependent origination", "Non-self (anatta)"],
        ),
        philosopher(
            "rumi",
            "Jalal ad-Din Rumi",
            "sufi",
            "1207–1273 CE",
            "Persian poet and Sufi mystic. His encounter with the wandering dervish Shams-i-Tabrizi transformed him from scholar to ecstatic poet. His Masnavi is called 'the Quran in Persian.' Founded the Mevlevi (Whirling Dervish) order.",
            &["Divine love as the supreme reality", "The wound is where the light enters", "Ego-death (fana)", "Unity of being"],
        ),
        philosopher(
            "shankara",
            "Adi Shankara",
            "vedantic",
            "788–820 CE",
            "Indian philosopher who consolidated Advaita (non-dual) Vedanta. Traveled across India debating scholars. Established four monastic centers (mathas). Died at 32, having reshaped Indian philosophy permanently.",
            &["Brahman alone is real; the world is appearance (maya)", "Self-inquiry", "Neti neti — not this, not this", "Liberation through knowledge (jnana)"],
        ),
        philosopher(
            "laozi",
            "Lao Tzu",
            "taoist",
            "6th century BCE (traditional)",
            "Semi-legendary sage, said to have been an archivist of the Zhou court. Reportedly wrote the Tao Te Ching at a border crossing while leaving civilization. The text's 5,000 characters have influenced millennia of thought.",
            &["Wu wei (non-action)", "The Tao that can be named is not the eternal Tao", "Water as the supreme metaphor", "Return to simplicity"],
        ),
        philosopher(
            "krishnamurti",
            "Jiddu Krishnamurti",
            "krishnamurti",
            "1895–1986 CE",
            "Raised by the Theosophical Society as the expected World Teacher. At 34, dissolved the Order of the Star, declaring 'Truth is a pathless land.' Spent 60 years giving talks worldwide, refusing followers, methods, and authority.",
            &["Freedom from the known", "The observer is the observed", "Choiceless awareness", "Thought as time and sorrow"],
        ),
    ]
}

fn themes() -> Vec<Theme> {
    vec![
        theme(
            "control",
            "Dichotomy of Control",
            "Distinguishing what is within our power (judgments, intentions, desires) from what is not (external events, others' actions, the body). The root insight of Stoicism, mirrored in Buddhism's acceptance and Taoism's wu wei.",
            &["stoic", "buddhist", "taoist", "krishnamurti"],
        ),
        theme(
            "impermanence",
            "Impermanence",
            "Nothing lasts. The Buddhist anicca, Stoic memento mori, Heraclitan flux. Neuroscience confirms: the brain itself is in constant structural change (neuroplasticity). Clinging to permanence is the root of suffering.",
            &["stoic", "buddhist", "taoist", "vedantic"],
        ),
        theme(
            "detachment",
            "Detachment & Non-Attachment",
            "Not indifference, but freedom from compulsive clinging. Stoic apatheia, Buddhist upekkha (equanimity), Vedantic vairagya, Taoist wu wei. The common thread: suffering arises from grasping, not from events.",
            &["stoic", "buddhist", "vedantic", "taoist", "cynic", "krishnamurti"],
        ),
        theme(
            "self-inquiry",
            "Self-Inquiry & Examination",
            "Socrates' 'know thyself,' Vedanta's 'Who am I?' (Atma Vichara), Krishnamurti's 'the observer is the observed,' Buddhist vipassana. The examined life as the only life worth living.",
            &["socratic", "vedantic", "buddhist", "krishnamurti", "stoic"],
        ),
        theme(
            "virtue",
            "Virtue as the Highest Good",
            "Stoic arete, Socratic virtue-as-knowledge, Buddhist sila, the Cynic's radical moral life. Not rule-following but alignment with one's deepest nature. Neuroscience links prosocial behavior to dopamine and oxytocin reward circuits.",
            &["stoic", "socratic", "cynic", "buddhist"],
        ),
        theme(
            "ego-dissolution",
            "Ego Dissolution",
            "Sufi fana, Buddhist anatta, Vedantic 'Atman is Brahman,' Krishnamurti's 'freedom from the known.' The perennial insight: the separate self is a construct. fMRI studies show default mode network quieting during meditation — the neural correlate of ego dissolution.",
            &["sufi", "buddhist", "vedantic", "krishnamurti", "taoist"],
        ),
        theme(
            "present-moment",
            "Present-Moment Awareness",
            "Stoic prosoche (attention), Buddhist sati (mindfulness), Krishnamurti's choiceless awareness. The past is memory, the future is imagination — only the present is real. Neuroscience: mindfulness thickens the prefrontal cortex and reduces amygdala reactivity.",
            &["stoic", "buddhist", "krishnamurti", "taoist", "sufi"],
        ),
        theme(
            "suffering",
            "The Nature of Suffering",
            "Buddhism's dukkha, Stoicism's 'it is not things that disturb us but our judgments about them,' Epicurus' hierarchy of desires. Suffering is not in events but in the mind's relationship to events. Neuropsychology: cognitive reappraisal literally changes neural pain responses.",
            &["buddhist", "stoic", "epicurean", "vedantic", "krishnamurti"],
        ),
        theme(
            "simplicity",
            "Simplicity & Voluntary Poverty",
            "Cynic asceticism, Epicurus' bread and cheese, Taoist pu (the uncarved block), Stoic voluntary discomfort. Excess creates dependency; simplicity creates freedom. Hedonic adaptation research confirms: more stuff ≠ more satisfaction.",
            &["cynic", "epicurean", "taoist", "stoic", "buddhist"],
        ),
        theme(
            "death",
            "Contemplation of Death",
            "Stoic memento mori, Epicurus' 'death is nothing to us,' Buddhist maranasati (death meditation), Socrates drinking hemlock serenely. Death awareness sharpens life. Terror Management Theory: conscious death reflection reduces unconscious anxiety and increases meaning.",
            &["stoic", "epicurean", "buddhist", "socratic"],
        ),
    ]
}

fn evidence() -> Vec<Evidence> {
    vec![
        evidence_item(
            "dmn-meditation",
            "Default Mode Network & Meditation",
            "Experienced meditators show reduced activity in the default mode network (DMN) — the brain's 'selfing' circuit. The DMN generates the narrative self, mind-wandering, and rumination. Its quieting maps directly to the contemplative experience of ego dissolution reported across Sufi, Buddhist, and Vedantic traditions.",
            "neuroscience",
            "Brewer et al., PNAS, 2011",
            &["ego-dissolution", "present-moment"],
        ),
        evidence_item(
            "cognitive-reappraisal",
            "Cognitive Reappraisal Changes Neural Pain Responses",
            "Reframing the meaning of an event (cognitive reappraisal) reduces activation in the amygdala and increases prefrontal cortex engagement. This is the neural mechanism behind Epictetus' core teaching: 'It is not things that disturb us, but our judgments about things.' Stoic practice is, neurologically, a reappraisal protocol.",
            "neuropsychology",
            "Ochsner & Gross, Trends in Cognitive Sciences, 2005",
            &["suffering", "control"],
        ),
        evidence_item(
            "mindfulness-cortex",
            "Mindfulness Thickens the Prefrontal Cortex",
            "8 weeks of mindfulness meditation (MBSR) increases cortical thickness in the prefrontal cortex (executive function, attention) and reduces grey matter in the amygdala (fear, reactivity). Ancient practice, measurable structural brain change.",
            "neuroscience",
            "Hölzel et al., Psychiatry Research: Neuroimaging, 2011",
            &["present-moment", "detachment"],
        ),
        evidence_item(
            "hedonic-treadmill",
            "Hedonic Adaptation and the Simplicity Insight",
            "Lottery winners return to baseline happiness within months. The hedonic treadmill confirms what Epicurus, Diogenes, and Seneca taught: external acquisitions produce diminishing returns. Lasting well-being comes from internal states, not circumstances.",
            "psychology",
            "Brickman & Campbell, 1971; updated by Diener et al.",
            &["simplicity", "detachment", "suffering"],
        ),
        evidence_item(
            "death-awareness",
            "Terror Management & Death Contemplation",
            "Terror Management Theory shows that unconscious death anxiety drives materialism, tribalism, and aggression. But conscious, deliberate death reflection (Stoic memento mori, Buddhist maranasati) has the opposite effect: it increases gratitude, prosocial behavior, and meaning-making. The ancients were right — the direction matters.",
            "psychology",
            "Cozzolino et al., Personality and Social Psychology Bulletin, 2004",
            &["death", "present-moment", "virtue"],
        ),
        evidence_item(
            "self-referential-processing",
            "The Constructed Self — Neuroscience of Anatta",
            "The brain has no single 'self center.' Self-referential processing is distributed across the DMN, medial prefrontal cortex, and posterior cingulate. The 'self' is a process, not a thing — confirming Buddhist anatta, Vedantic maya, and Krishnamurti's 'the observer is the observed.'",
            "neuroscience",
            "Northoff et al., Neuroscience & Biobehavioral Reviews, 2006",
            &["ego-dissolution", "self-inquiry"],
        ),
    ]
}

fn quotes() -> Vec<Quote> {
    vec![
        // Epictetus
        quote("e1", "It's not what happens to you, but how you react to it that matters.",
            "epictetus", "stoic", "Discourses", &["control", "suffering"], &["cognitive-reappraisal"]),
        quote("e2", "Make the best use of what is in your power, and take the rest as it happens.",
            "epictetus", "stoic", "Discourses", &["control", "detachment"], &[]),
        quote("e3", "Man is not worried by real problems so much as by his imagined anxieties about real problems.",
            "epictetus", "stoic", "Enchiridion", &["suffering", "control"], &["cognitive-reappraisal"]),
        quote("e4", "Wealth consists not in having great possessions, but in having few wants.",
            "epictetus", "stoic", "Discourses", &["simplicity", "detachment"], &["hedonic-treadmill"]),
        quote("e5", "First say to yourself what you would be; and then do what you have to do.",
            "epictetus", "stoic", "Discourses", &["virtue", "self-inquiry"], &[]),
        quote("e6", "No man is free who is not master of himself.",
            "epictetus", "stoic", "Fragments", &["control", "detachment"], &[]),
        // Marcus Aurelius
        quote("ma1", "You have power over your mind — not outside events. Realize this, and you will find strength.",
            "marcus-aurelius", "stoic", "Meditations", &["control", "suffering"], &["cognitive-reappraisal"]),
        quote("ma2", "Think of yourself as dead. You have lived your life. Now, take what's left and live it properly.",
            "marcus-aurelius", "stoic", "Meditations", &["death", "present-moment"], &["death-awareness"]),
        quote("ma3", "The universe is change; our life is what our thoughts make it.",
            "marcus-aurelius", "stoic", "Meditations", &["impermanence", "suffering"], &[]),
        // Seneca
        quote("s1", "We suffer more often in imagination than in reality.",
            "seneca", "stoic", "Letters to Lucilius", &["suffering", "control"], &["cognitive-reappraisal"]),
        quote("s2", "It is not that we have a short time to live, but that we waste a great deal of it.",
            "seneca", "stoic", "On the Shortness of Life", &["death", "present-moment"], &[]),
        // Epicurus
        quote("ep1", "Death does not concern us, because as long as we exist, death is not here. And when it does come, we no longer exist.",
            "epicurus", "epicurean", "Letter to Menoeceus", &["death", "suffering"], &[]),
        quote("ep2", "Do not spoil what you have by desiring what you have not; remember that what you now have was once among the things you only hoped for.",
            "epicurus", "epicurean", "Vatican Sayings", &["detachment", "simplicity", "present-moment"], &["hedonic-treadmill"]),
        // Diogenes
        quote("d1", "It is the privilege of the gods to want nothing, and of godlike men to want little.",
            "diogenes", "cynic", "Lives of Eminent Philosophers, Diogenes Laertius", &["simplicity", "detachment"], &["hedonic-treadmill"]),
        // Socrates
        quote("so1", "The unexamined life is not worth living.",
            "socrates", "socratic", "Apology, Plato", &["self-inquiry", "virtue"], &[]),
        quote("so2", "I know that I know nothing.",
            "socrates", "socratic", "Apology, Plato", &["self-inquiry", "ego-dissolution"], &[]),
        // The Buddha
        quote("b1", "In the end, only three things matter: how much you loved, how gently you lived, and how gracefully you let go of things not meant for you.",
            "buddha", "buddhist", "Attributed", &["detachment", "impermanence", "virtue"], &[]),
        quote("b2", "You only lose what you cling to.",
            "buddha", "buddhist", "Attributed", &["detachment", "suffering"], &[]),
        quote("b3", "Nothing is permanent. Everything is subject to change. Being is always becoming.",
            "buddha", "buddhist", "Attributed", &["impermanence"], &["mindfulness-cortex"]),
        // Rumi
        quote("r1", "The wound is the place where the Light enters you.",
            "rumi", "sufi", "Collected Poems", &["suffering", "ego-dissolution"], &[]),
        quote("r2", "Yesterday I was clever, so I wanted to change the world. Today I am wise, so I am changing myself.",
            "rumi", "sufi", "Collected Poems", &["self-inquiry", "control"], &[]),
        // Adi Shankara
        quote("sh1", "Brahman alone is real; the world is appearance. The self is nothing but Brahman.",
            "shankara", "vedantic", "Vivekachudamani", &["ego-dissolution", "self-inquiry"], &["self-referential-processing"]),
        // Lao Tzu
        quote("lt1", "Nature does not hurry, yet everything is accomplished.",
            "laozi", "taoist", "Tao Te Ching", &["detachment", "present-moment"], &[]),
        quote("lt2", "When I let go of what I am, I become what I might be.",
            "laozi", "taoist", "Tao Te Ching", &["detachment", "ego-dissolution"], &[]),
        // Krishnamurti
        quote("k1", "It is no measure of health to be well adjusted to a profoundly sick society.",
            "krishnamurti", "krishnamurti", "Attributed", &["self-inquiry", "virtue"], &[]),
        quote("k2", "The ability to observe without evaluating is the highest form of intelligence.",
            "krishnamurti", "krishnamurti", "Freedom from the Known", &["present-moment", "ego-dissolution"], &["dmn-meditation"]),
    ]
}
