//! Built-in catalog data: 13 categories, 15 topics each.

use dailyconcept_core::Category;

pub(crate) type SeedRow = (&'static str, &'static str);

pub(crate) const ADJACENCY: &[(Category, &[Category])] = &[
    (Category::Technology, &[Category::Science, Category::Business]),
    (Category::Business, &[Category::Economics, Category::Technology]),
    (Category::Economics, &[Category::Business, Category::Politics]),
    (Category::Psychology, &[Category::Health, Category::Philosophy, Category::Parenting]),
    (Category::Philosophy, &[Category::Psychology, Category::History]),
    (Category::History, &[Category::Philosophy, Category::Culture, Category::Art]),
    (Category::Art, &[Category::Culture, Category::History]),
    (Category::Science, &[Category::Technology, Category::Nature, Category::Health]),
    (Category::Health, &[Category::Science, Category::Psychology, Category::Parenting]),
    (Category::Parenting, &[Category::Psychology, Category::Health]),
    (Category::Politics, &[Category::Economics, Category::History]),
    (Category::Culture, &[Category::Art, Category::History, Category::Philosophy]),
    (Category::Nature, &[Category::Science, Category::Health]),
];

pub(crate) const SEEDS: &[(Category, &[SeedRow])] = &[
    (
        Category::Technology,
        &[
            (
                "Quantum Computing",
                "How computers could use quantum mechanics to solve impossible problems",
            ),
            ("Neural Networks", "How machines learn to recognize patterns like the human brain"),
            ("Blockchain", "A distributed ledger that makes trust between strangers possible"),
            ("Edge Computing", "Why processing data closer to its source changes everything"),
            ("WebAssembly", "How native-speed code runs safely in your browser"),
            ("Container Orchestration", "Managing thousands of tiny applications as one system"),
            ("GraphQL", "A smarter way to ask for exactly the data you need"),
            ("Serverless Architecture", "Running code without managing servers"),
            ("Microservices", "Breaking large applications into independent pieces"),
            ("5G Networks", "Why the fifth generation of wireless will enable new possibilities"),
            ("Augmented Reality", "Overlaying digital information onto the physical world"),
            ("API Design", "Creating interfaces that make software talk to software"),
            ("Encryption", "How mathematics keeps your secrets safe"),
            (
                "DevOps Culture",
                "Why breaking down silos between development and operations matters",
            ),
            ("Progressive Web Apps", "Websites that feel like native mobile apps"),
        ],
    ),
    (
        Category::Business,
        &[
            ("Network Effects", "Why some products become more valuable as more people use them"),
            ("Flywheel Effect", "How small wins compound into unstoppable momentum"),
            ("Opportunity Cost", "The hidden price of every choice you make"),
            ("Economies of Scale", "Why bigger companies can produce things cheaper"),
            ("Moats", "What protects successful businesses from competition"),
            ("Product-Market Fit", "The moment when what you build matches what people want"),
            ("Unit Economics", "Understanding profitability one customer at a time"),
            ("Pivot Strategy", "When changing direction is the smartest move"),
            (
                "Blue Ocean Strategy",
                "Finding uncontested market space instead of fighting competitors",
            ),
            ("Freemium Models", "How giving away products for free can make money"),
            ("Vertical Integration", "Why some companies control their entire supply chain"),
            ("Subscription Economy", "The shift from ownership to ongoing relationships"),
            ("Market Segmentation", "Dividing customers into meaningful groups"),
            ("Lean Startup", "Building businesses through rapid experimentation"),
            ("Brand Equity", "Why some names are worth billions"),
        ],
    ),
    (
        Category::Economics,
        &[
            ("Inflation", "Why your money buys less over time"),
            ("Supply and Demand", "The invisible forces that set prices"),
            ("Compound Interest", "How small amounts grow into fortunes over time"),
            ("Comparative Advantage", "Why countries trade even when one is better at everything"),
            ("Moral Hazard", "Why insurance can make people take bigger risks"),
            ("Tragedy of the Commons", "When individual incentives destroy shared resources"),
            ("Marginal Utility", "Why the first slice of pizza tastes better than the fifth"),
            ("Game Theory", "Mathematical strategies for competitive situations"),
            ("Price Elasticity", "How sensitive buyers are to price changes"),
            ("Monetary Policy", "How central banks try to control the economy"),
            ("GDP", "Measuring the total value of everything a country produces"),
            ("Fiscal Policy", "How governments use spending and taxes to influence the economy"),
            ("Opportunity Cost in Economics", "What society gives up when making resource choices"),
            ("Market Failure", "When free markets don't produce the best outcomes"),
            ("Behavioral Economics", "Why people make irrational economic decisions"),
        ],
    ),
    (
        Category::Psychology,
        &[
            ("Confirmation Bias", "Why we see what we expect to see"),
            ("Cognitive Dissonance", "The mental discomfort of holding contradictory beliefs"),
            ("Growth Mindset", "Why believing you can improve actually helps you improve"),
            ("Dunning-Kruger Effect", "Why incompetent people don't know they're incompetent"),
            ("Loss Aversion", "Why losing $100 hurts more than gaining $100 feels good"),
            ("Anchoring Bias", "How the first number you hear influences your judgment"),
            ("Imposter Syndrome", "Why successful people feel like frauds"),
            ("Flow State", "When you're so absorbed in an activity that time disappears"),
            ("Maslow's Hierarchy", "The ladder of human needs from survival to self-actualization"),
            ("Neuroplasticity", "How your brain physically changes when you learn"),
            ("Intrinsic Motivation", "Why internal drive beats external rewards"),
            ("Projection", "Seeing your own traits in others"),
            ("Sunk Cost Fallacy", "Why we stick with bad decisions because we've already invested"),
            ("Availability Heuristic", "Why recent events feel more common than they are"),
            (
                "Emotional Intelligence",
                "Understanding and managing emotions in yourself and others",
            ),
        ],
    ),
    (
        Category::Philosophy,
        &[
            ("Occam's Razor", "Why the simplest explanation is often correct"),
            ("Ship of Theseus", "If you replace every part, is it still the same thing?"),
            (
                "Stoicism",
                "Ancient wisdom about controlling what you can and accepting what you can't",
            ),
            ("The Trolley Problem", "A thought experiment about ethics and difficult choices"),
            ("Existentialism", "Finding meaning in a universe without inherent purpose"),
            ("Utilitarianism", "The greatest good for the greatest number"),
            ("Plato's Cave", "Are we all prisoners mistaking shadows for reality?"),
            ("Social Contract", "The implicit agreement that holds society together"),
            ("Determinism vs Free Will", "Are our choices truly free or already predetermined?"),
            ("Categorical Imperative", "Kant's test: what if everyone did what you're doing?"),
            ("Nihilism", "If nothing has inherent meaning, what should we do?"),
            ("Epistemology", "How do we know what we know?"),
            ("The Veil of Ignorance", "Designing a fair society without knowing your place in it"),
            ("Absurdism", "Finding freedom in life's meaninglessness"),
            ("Solipsism", "What if only your mind exists?"),
        ],
    ),
    (
        Category::History,
        &[
            ("The Printing Press", "How one invention democratized knowledge forever"),
            ("The Silk Road", "Ancient trade routes that connected East and West"),
            ("The Scientific Revolution", "When observation replaced tradition as truth"),
            ("The Industrial Revolution", "How machines transformed human civilization"),
            ("The Renaissance", "Europe's rebirth of art, science, and humanism"),
            ("The Enlightenment", "When reason and individual rights challenged authority"),
            ("The Cold War", "Decades of tension without direct conflict between superpowers"),
            ("The Fall of Rome", "How the greatest empire collapsed from within"),
            ("The Agricultural Revolution", "When humans stopped hunting and started farming"),
            ("The Space Race", "Competition that put humans on the moon"),
            ("The Black Death", "How plague reshaped medieval Europe"),
            ("Colonial Era", "European expansion and its lasting global impact"),
            ("The Great Depression", "Economic collapse that changed government's role"),
            ("The Information Age", "How digital technology transformed society"),
            ("Ancient Democracy", "The birth of citizen governance in Athens"),
        ],
    ),
    (
        Category::Art,
        &[
            ("Impressionism", "Capturing fleeting moments of light and color"),
            ("The Golden Ratio", "A mathematical proportion that appears beautiful to humans"),
            ("Surrealism", "Art that explores the unconscious mind and dreams"),
            ("Minimalism", "Finding more by using less"),
            ("Perspective Drawing", "The Renaissance trick that made paintings look real"),
            ("Abstract Expressionism", "When emotion becomes the subject of art"),
            ("Street Art", "How graffiti became legitimate contemporary art"),
            ("Color Theory", "Why some color combinations work and others don't"),
            ("Baroque Art", "Drama, emotion, and movement in visual form"),
            ("Conceptual Art", "When the idea matters more than the object"),
            ("Japanese Aesthetics", "Wabi-sabi and the beauty of imperfection"),
            ("Cubism", "Picasso's revolution: showing multiple viewpoints at once"),
            ("Art Nouveau", "Organic, flowing lines inspired by nature"),
            ("Pop Art", "Elevating consumer culture to fine art"),
            ("Renaissance Sculpture", "Reviving classical ideals in marble and bronze"),
        ],
    ),
    (
        Category::Science,
        &[
            ("Evolution by Natural Selection", "How life's diversity emerged without a designer"),
            ("The Big Bang", "How the universe began from a single point"),
            ("Relativity", "Why time and space aren't what they seem"),
            ("DNA", "The elegant code that builds all living things"),
            ("Photosynthesis", "How plants turn sunlight into chemical energy"),
            ("Black Holes", "Where gravity is so strong that nothing escapes"),
            ("CRISPR", "Gene editing that could cure diseases or change humanity"),
            ("Climate Systems", "Why Earth's temperature is changing faster than ever"),
            ("Antibiotics", "How we discovered medicine in mold"),
            ("Plate Tectonics", "Why continents drift and earthquakes happen"),
            ("Vaccines", "Teaching your immune system to fight before infection"),
            ("Quantum Mechanics", "Where particles exist in multiple states at once"),
            ("Dark Matter", "The invisible substance that makes up most of the universe"),
            ("The Microbiome", "The trillions of bacteria that keep you alive"),
            ("Entropy", "Why disorder always increases"),
        ],
    ),
    (
        Category::Health,
        &[
            ("Intermittent Fasting", "Why when you eat might matter as much as what you eat"),
            ("Sleep Cycles", "The stages your brain goes through every night"),
            ("The Placebo Effect", "Why believing treatment works actually makes it work"),
            ("Inflammation", "Your body's double-edged immune response"),
            ("Gut-Brain Axis", "How your stomach and brain communicate"),
            ("Metabolic Rate", "Why some people burn calories faster than others"),
            ("Cortisol", "The stress hormone that can save or harm you"),
            ("Mitochondria", "The powerhouses that energize every cell"),
            ("Autophagy", "Your body's cellular recycling system"),
            ("The Immune System", "Your personal army fighting invisible invaders"),
            ("Circadian Rhythm", "Your internal clock that runs on a 24-hour cycle"),
            ("Oxidative Stress", "When free radicals damage your cells"),
            ("Neurogenesis", "Growing new brain cells throughout life"),
            ("Hormesis", "Why small doses of stress make you stronger"),
            ("Muscle Memory", "Why skills come back quickly after a break"),
        ],
    ),
    (
        Category::Parenting,
        &[
            ("Attachment Theory", "How early bonds shape relationships for life"),
            ("Executive Function", "The mental skills children need to succeed"),
            ("Positive Discipline", "Teaching without punishment or permissiveness"),
            ("Theory of Mind", "When children understand others have different thoughts"),
            ("Growth Mindset for Kids", "Teaching children that abilities can be developed"),
            ("Emotional Regulation", "Helping kids manage big feelings"),
            ("Natural Consequences", "When reality is the best teacher"),
            ("Scaffolding", "Providing just enough support for children to succeed"),
            ("Play-Based Learning", "Why children learn best through play"),
            ("Authoritative Parenting", "Balancing warmth with clear boundaries"),
            ("Mirror Neurons", "Why children imitate what they see"),
            ("Language Acquisition", "How babies learn to speak without formal teaching"),
            ("Separation Anxiety", "Why young children fear being apart from caregivers"),
            ("Siblings Rivalry", "Competition and its role in development"),
            ("Critical Periods", "Windows of time when learning certain skills is easiest"),
        ],
    ),
    (
        Category::Politics,
        &[
            ("Separation of Powers", "Why government is divided into competing branches"),
            ("Federalism", "Splitting power between national and local governments"),
            ("Gerrymandering", "Drawing voting districts to win elections"),
            ("The Electoral College", "Why the U.S. doesn't elect presidents by popular vote"),
            ("Lobbying", "How interest groups influence lawmakers"),
            ("Checks and Balances", "Each branch limiting the others' power"),
            ("Parliamentary Systems", "When the legislature chooses the executive"),
            ("Judicial Review", "Courts striking down unconstitutional laws"),
            ("Direct Democracy", "Citizens voting on issues instead of representatives"),
            ("Political Polarization", "Why left and right are moving further apart"),
            ("Soft Power", "Influence through culture and values, not military force"),
            ("Term Limits", "The trade-offs of forcing leaders out"),
            ("Campaign Finance", "Money's controversial role in elections"),
            ("Filibuster", "Talking indefinitely to block legislation"),
            ("Populism", "Appealing to ordinary people against elites"),
        ],
    ),
    (
        Category::Culture,
        &[
            ("Cultural Appropriation", "When borrowing from another culture becomes problematic"),
            ("Rituals", "Symbolic acts that bind communities together"),
            ("Oral Traditions", "Passing knowledge through storytelling"),
            ("Cultural Relativism", "Understanding practices within their own context"),
            ("Subcultures", "Groups with distinct values within larger society"),
            ("Cultural Evolution", "How ideas spread and change over time"),
            ("Mythology", "Stories that explain the world and human nature"),
            ("Rites of Passage", "Ceremonies marking life transitions"),
            ("Globalization", "How cultures blend and clash worldwide"),
            ("Folk Art", "Traditional crafts passed through generations"),
            ("Music Theory", "The universal language of rhythm and melody"),
            ("Festivals", "Celebrations that reinforce shared identity"),
            ("Language and Thought", "How words shape how we see the world"),
            ("Food Culture", "Why what we eat is about more than nutrition"),
            ("Cultural Identity", "How we define who we are through group membership"),
        ],
    ),
    (
        Category::Nature,
        &[
            ("Symbiosis", "When different species depend on each other"),
            ("Keystone Species", "Animals whose presence shapes entire ecosystems"),
            ("Bioluminescence", "Living things that create their own light"),
            ("Mycelium Networks", "Underground fungal networks connecting forests"),
            ("Migration Patterns", "Why animals travel thousands of miles annually"),
            ("Pollination", "The partnership between plants and pollinators"),
            ("Biomimicry", "Solving human problems by copying nature"),
            ("Ecosystem Services", "What nature provides that we take for granted"),
            ("Trophic Cascades", "How top predators shape everything below them"),
            ("Coral Reefs", "Underwater cities built by tiny animals"),
            ("Old-Growth Forests", "Ancient ecosystems that can't be replicated"),
            ("Animal Communication", "How creatures share information without words"),
            ("Extremophiles", "Life thriving in impossible conditions"),
            ("Regeneration", "Animals that can regrow lost body parts"),
            ("Phenology", "How organisms time life events with seasons"),
        ],
    ),
];
