//! The built-in catalog shipped with the app.

use crate::{
  Result,
  catalog::{Chapter, ContentCatalog, Subject, Topic},
};

struct SeedSubject {
  id:      &'static str,
  name:    &'static str,
  icon:    &'static str,
  color:   &'static str,
  chapter: (&'static str, &'static str),
  /// `(id, name, localized name, body)`
  topics:  &'static [(&'static str, &'static str, Option<&'static str>, &'static str)],
}

/// The seed subjects, each with its single chapter of topics.
pub fn seed_subjects() -> Vec<Subject> {
  SEED.iter().map(SeedSubject::build).collect()
}

/// The seed hierarchy as an indexed catalog.
pub fn seed_catalog() -> Result<ContentCatalog> { ContentCatalog::new(seed_subjects()) }

impl SeedSubject {
  fn build(&self) -> Subject {
    let (chapter_id, chapter_name) = self.chapter;
    let topics = self
      .topics
      .iter()
      .map(|&(id, name, localized, body)| {
        let topic = Topic::new(id, name, chapter_id, body);
        match localized {
          Some(l) => topic.with_localized_name(l),
          None => topic,
        }
      })
      .collect();

    Subject {
      id:           self.id.to_owned(),
      display_name: self.name.to_owned(),
      icon:         self.icon.to_owned(),
      color_token:  self.color.to_owned(),
      chapters:     vec![Chapter {
        id:           chapter_id.to_owned(),
        display_name: chapter_name.to_owned(),
        subject_id:   self.id.to_owned(),
        topics,
      }],
    }
  }
}

#[rustfmt::skip]
const SEED: &[SeedSubject] = &[
  SeedSubject {
    id:      "indian-history",
    name:    "Indian History",
    icon:    "🏛️",
    color:   "hsl(35, 70%, 55%)",
    chapter: ("history-topics", "Historical Topics"),
    topics:  &[
      ("indus-valley", "Indus valley civilization", Some("सिंधु घाटी सभ्यता"), "Content for Indus valley civilization"),
      ("vedic-civilization", "Vedic civilization", Some("वैदिक सभ्यता"), "Content for Vedic civilization"),
      ("buddhism", "Buddhism", Some("बौद्ध धर्म"), "Content for Buddhism"),
      ("jainism", "Jainism", Some("जैन धर्म"), "Content for Jainism"),
      ("mauryan-empire", "Mauryan empire", Some("मौर्य साम्राज्य"), "Content for Mauryan empire"),
      ("gupta-empire", "Gupta empire", Some("गुप्त साम्राज्य"), "Content for Gupta empire"),
      ("harshavardhan", "Harshavardhan", Some("हर्षवर्धन"), "Content for Harshavardhan"),
      ("rajput-era", "Rajput era", Some("राजपूत युग"), "Content for Rajput era"),
      ("sultanate-era", "Sultanate era", Some("सल्तनत काल"), "Content for Sultanate era"),
      ("mughal-empire", "Mughal empire", Some("मुगल साम्राज्य"), "Content for Mughal empire"),
      ("maratha-empire", "Maratha empire", Some("मराठा साम्राज्य"), "Content for Maratha empire"),
      ("british-rule", "British Rule and 1st war of independence", Some("ब्रिटिश शासन और प्रथम स्वतंत्रता संग्राम"), "Content for British Rule and 1st war of independence"),
      ("social-economic-impact", "Social and economic impact of British rule", Some("ब्रिटिश शासन का सामाजिक और आर्थिक प्रभाव"), "Content for Social and economic impact of British rule"),
    ],
  },
  SeedSubject {
    id:      "national-movement",
    name:    "Indian National Movement",
    icon:    "🇮🇳",
    color:   "hsl(15, 85%, 60%)",
    chapter: ("movement-topics", "Movement Topics"),
    topics:  &[
      ("initial-stage", "Initial stage of freedom movement", Some("स्वतंत्रता आंदोलन का प्रारंभिक चरण"), "Content for Initial stage of freedom movement"),
      ("swadeshi-civil-disobedience", "Swadeshi and civil disobedience movement - Mahatma Gandhi and other leaders' role", Some("स्वदेशी और सविनय अवज्ञा आंदोलन - महात्मा गांधी और अन्य नेताओं की भूमिका"), "Content for Swadeshi and civil disobedience movement"),
      ("revolutionary-movement", "Revolutionary movement and rise of militant nationalism", Some("क्रांतिकारी आंदोलन और उग्र राष्ट्रवाद का उदय"), "Content for Revolutionary movement and rise of militant nationalism"),
      ("farewell-amendment", "Farewell Amendment and British India Act 1935", Some("फेयरवेल संशोधन और भारत शासन अधिनियम 1935"), "Content for Farewell Amendment and British India Act 1935"),
      ("quit-india", "Quit India movement, Azad Hind Fauj and Netaji Subhash Chandra Bose", Some("भारत छोड़ो आंदोलन, आज़ाद हिंद फौज और नेताजी सुभाष चंद्र बोस"), "Content for Quit India movement, Azad Hind Fauj and Netaji Subhash Chandra Bose"),
    ],
  },
  SeedSubject {
    id:      "geography",
    name:    "Geography (Indian & World)",
    icon:    "🌍",
    color:   "hsl(120, 60%, 50%)",
    chapter: ("geography-topics", "Geography Topics"),
    topics:  &[
      ("rivers", "Rivers", None, "Content for Rivers"),
      ("water-resources", "Water resources", None, "Content for Water resources"),
      ("mountains-glaciers", "Mountains & glaciers", None, "Content for Mountains & glaciers"),
      ("desert-dry-areas", "Desert & dry areas", None, "Content for Desert & dry areas"),
      ("forest", "Forest", None, "Content for Forest"),
      ("mineral-resources", "Mineral resources", None, "Content for Mineral resources"),
      ("political-geography", "Political Geography of India & World", None, "Content for Political Geography of India & World"),
      ("climate", "Climate", Some("जलवायु"), "Content for Climate"),
      ("time-zone", "Time zone", None, "Content for Time zone"),
      ("demographics-migrations", "Demographics & migrations", None, "Content for Demographics & migrations"),
    ],
  },
  SeedSubject {
    id:      "indian-economy",
    name:    "Indian Economy (1947 to 1991)",
    icon:    "💰",
    color:   "hsl(45, 90%, 55%)",
    chapter: ("economy-topics", "Economy Topics"),
    topics:  &[
      ("planning-commission", "Planning commission and 5-year plans", None, "Content for Planning commission and 5-year plans"),
      ("mixed-economy", "Development of mixed economy: Private & Public", None, "Content for Development of mixed economy"),
      ("green-revolution", "Green revolution", None, "Content for Green revolution"),
      ("white-revolution", "White revolution & operation flood", None, "Content for White revolution & operation flood"),
      ("banking-nationalization", "Banking nationalization", None, "Content for Banking nationalization"),
      ("lpg-reforms", "LPG reforms of 1991", None, "Content for LPG reforms of 1991"),
      ("economic-reforms-2014", "Economic reforms post-2014", None, "Content for Economic reforms post-2014"),
      ("farm-reforms", "Farm reforms", None, "Content for Farm reforms"),
      ("structural-reforms", "Structural reforms", None, "Content for Structural reforms"),
      ("labour-reforms", "Labour reforms", None, "Content for Labour reforms"),
      ("economic-reforms", "Economic reforms", None, "Content for Economic reforms"),
      ("gst", "GST", None, "Content for GST"),
    ],
  },
  SeedSubject {
    id:      "constitution-administration",
    name:    "Indian Constitution & Public Administration",
    icon:    "⚖️",
    color:   "hsl(240, 70%, 60%)",
    chapter: ("constitution-topics", "Constitution Topics"),
    topics:  &[
      ("salient-features", "Salient Features", None, "Content for Salient Features"),
      ("directive-principles", "Directive principles", None, "Content for Directive principles"),
      ("fundamental-rights-duties", "Fundamental rights & duties", None, "Content for Fundamental rights & duties"),
      ("parliamentary-system", "Parliamentary system", None, "Content for Parliamentary system"),
      ("federal-system", "Federal system, Union Govt & UR, Union Govt & States", None, "Content for Federal system"),
      ("judicial-framework", "Judicial Framework", None, "Content for Judicial Framework"),
      ("district-administration", "District Administration", None, "Content for District Administration"),
      ("local-bodies", "Local bodies and Panchayat Raj", None, "Content for Local bodies and Panchayat Raj"),
    ],
  },
  SeedSubject {
    id:      "general-science",
    name:    "General Science",
    icon:    "🔬",
    color:   "hsl(180, 70%, 50%)",
    chapter: ("science-topics", "Science Topics"),
    topics:  &[
      ("basic-physics", "Basic Physics", None, "Content for Basic Physics"),
      ("basic-chemistry", "Basic Chemistry", None, "Content for Basic Chemistry"),
      ("basic-biology", "Basic Biology", None, "Content for Basic Biology"),
    ],
  },
  SeedSubject {
    id:      "elementary-arithmetic",
    name:    "Elementary Arithmetic",
    icon:    "🔢",
    color:   "hsl(300, 70%, 55%)",
    chapter: ("arithmetic-topics", "Arithmetic Topics"),
    topics:  &[
      ("whole-numbers", "Whole numbers, fractions and decimals", None, "Content for Whole numbers, fractions and decimals"),
      ("percentage", "Percentage", None, "Content for Percentage"),
      ("arithmetic-equations", "Simple arithmetic equations", None, "Content for Simple arithmetic equations"),
      ("square-roots", "Square & square roots", None, "Content for Square & square roots"),
      ("exponent-powers", "Exponent and powers", None, "Content for Exponent and powers"),
      ("average", "Average", None, "Content for Average"),
    ],
  },
  SeedSubject {
    id:      "general-hindi",
    name:    "General Hindi",
    icon:    "📚",
    color:   "hsl(0, 70%, 55%)",
    chapter: ("hindi-topics", "Hindi Topics"),
    topics:  &[
      ("sandhi", "संधि", None, "Content for संधि"),
      ("vilom-shabd", "विलोम शब्द", None, "Content for विलोम शब्द"),
      ("paryayvachi", "पर्यायवाची वाक्यांशों के लिए एक शब्द", None, "Content for पर्यायवाची वाक्यांशों के लिए एक शब्द"),
      ("ling", "लिंग", None, "Content for लिंग"),
      ("samashrut", "समश्रुतभिन्नार्थक शब्द", None, "Content for समश्रुतभिन्नार्थक शब्द"),
      ("muhavare", "मुहावरे-लोकोक्तियां", None, "Content for मुहावरे-लोकोक्तियां"),
      ("ashuddhiyan", "सामान्य अशुद्धियां", None, "Content for सामान्य अशुद्धियां"),
      ("lekhak-rachnaye", "लेखक और रचनाएं", None, "Content for लेखक और रचनाएं"),
    ],
  },
  SeedSubject {
    id:      "general-english",
    name:    "General English",
    icon:    "🔤",
    color:   "hsl(210, 70%, 55%)",
    chapter: ("english-topics", "English Topics"),
    topics:  &[
      ("grammar", "English Grammar", None, "Content for English Grammar"),
      ("passages", "Questions on passages", None, "Content for Questions on passages"),
    ],
  },
  SeedSubject {
    id:      "logic-reasoning",
    name:    "Logic & Reasoning",
    icon:    "🧠",
    color:   "hsl(270, 70%, 55%)",
    chapter: ("reasoning-topics", "Reasoning Topics"),
    topics:  &[
      ("order-ranking", "Order & ranking", None, "Content for Order & ranking"),
      ("blood-relations", "Blood relations", None, "Content for Blood relations"),
      ("calendar-watch", "Calendar & watch", None, "Content for Calendar & watch"),
      ("cause-effect", "Cause & effect", None, "Content for Cause & effect"),
      ("coding-decoding", "Coding decoding", None, "Content for Coding decoding"),
      ("conclusive-reasoning", "Conclusive reasoning, etc.", None, "Content for Conclusive reasoning"),
    ],
  },
  SeedSubject {
    id:      "current-affairs",
    name:    "Current Affairs",
    icon:    "📰",
    color:   "hsl(25, 80%, 55%)",
    chapter: ("affairs-topics", "Current Affairs Topics"),
    topics:  &[
      ("national-affairs", "National current affairs", None, "Content for National current affairs"),
      ("international-affairs", "International current affairs", None, "Content for International current affairs"),
    ],
  },
  SeedSubject {
    id:      "general-awareness",
    name:    "General Awareness",
    icon:    "🌟",
    color:   "hsl(60, 80%, 55%)",
    chapter: ("awareness-topics", "General Awareness Topics"),
    topics:  &[
      ("neighbours", "India's Neighbours", None, "Content for India's Neighbours"),
      ("countries-capitals", "Countries, Capitals & Currencies", None, "Content for Countries, Capitals & Currencies"),
      ("states-uts", "Indian States & UTs", None, "Content for Indian States & UTs"),
      ("parliament", "Indian Parliament", None, "Content for Indian Parliament"),
      ("important-days", "Days of National & International Importance", None, "Content for Days of National & International Importance"),
      ("world-organizations", "World organizations & HQs", None, "Content for World organizations & HQs"),
      ("tourism", "Indian tourism destinations", None, "Content for Indian tourism destinations"),
      ("art-culture", "Indian art & culture", None, "Content for Indian art & culture"),
      ("sports", "Indian & International Sports", None, "Content for Indian & International Sports"),
      ("research-institutes", "Indian research institutes", None, "Content for Indian research institutes"),
      ("books-authors", "Books & Authors", None, "Content for Books & Authors"),
      ("awards-honours", "Awards & Honours", None, "Content for Awards & Honours"),
      ("climate-environment", "Climate change & environment", None, "Content for Climate change & environment"),
    ],
  },
];
