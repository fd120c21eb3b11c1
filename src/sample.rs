use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::config::DataPaths;
use crate::io::write_raw_transcript;
use crate::models::{FrontMatter, Transcript};

const CHANNEL: &str = "Lenny's Podcast";

/// A development transcript shipped with the binary
pub struct SampleEpisode {
    pub folder: &'static str,
    pub guest: &'static str,
    pub title: &'static str,
    pub video_id: &'static str,
    pub description: &'static str,
    pub duration_seconds: u64,
    pub view_count: u64,
    pub body: &'static str,
}

impl SampleEpisode {
    pub fn youtube_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }

    /// Front matter as written to the raw transcript file
    pub fn front_matter(&self) -> FrontMatter {
        FrontMatter {
            guest: Some(self.guest.to_string()),
            title: Some(self.title.to_string()),
            youtube_url: Some(self.youtube_url()),
            video_id: None,
            description: Some(self.description.to_string()),
            duration_seconds: Some(self.duration_seconds),
            duration: None,
            view_count: Some(self.view_count),
            channel: Some(CHANNEL.to_string()),
        }
    }

    /// The episode as an ingested transcript, without topics
    pub fn to_transcript(&self) -> Transcript {
        Transcript {
            id: self.folder.to_string(),
            guest: self.guest.to_string(),
            title: self.title.to_string(),
            youtube_url: self.youtube_url(),
            video_id: self.video_id.to_string(),
            description: self.description.to_string(),
            duration_seconds: self.duration_seconds,
            duration: crate::io::format_duration(self.duration_seconds),
            view_count: self.view_count,
            channel: CHANNEL.to_string(),
            transcript: self.body.trim().to_string(),
            folder: self.folder.to_string(),
            topics: Vec::new(),
        }
    }
}

/// Sample transcripts as ingested records, in folder order
pub fn sample_transcripts() -> Vec<Transcript> {
    SAMPLE_EPISODES.iter().map(SampleEpisode::to_transcript).collect()
}

/// Write the sample episodes into the raw directory, replacing same-named files
pub fn write_sample_corpus(paths: &DataPaths) -> Result<Vec<PathBuf>> {
    let raw_dir = paths.raw_dir();
    let written = SAMPLE_EPISODES
        .iter()
        .map(|episode| {
            write_raw_transcript(&raw_dir, episode.folder, &episode.front_matter(), episode.body)
        })
        .collect::<Result<Vec<_>>>()?;

    info!("Wrote {} sample transcripts to {:?}", written.len(), raw_dir);
    Ok(written)
}

pub static SAMPLE_EPISODES: &[SampleEpisode] = &[
    SampleEpisode {
        folder: "april-dunford",
        guest: "April Dunford",
        title: "A step-by-step guide to crafting a sales pitch that wins",
        video_id: "pKCbDoWr3cA",
        description: "Positioning expert April Dunford on competitive alternatives, best-fit customers and sales narratives.",
        duration_seconds: 4_512,
        view_count: 48_210,
        body: r#"
Lenny (00:00:00):
April, welcome to the podcast. Your book Obviously Awesome changed how a lot of founders think about positioning.

April Dunford (00:00:12):
Thanks for having me. Most companies never do positioning on purpose. They inherit it from the first idea they had, and then they wonder why the sales team struggles to explain the product.

April Dunford (00:03:40):
The positioning exercise starts with competitive alternatives. What would customers do if you did not exist? Usually the answer is a spreadsheet or an intern, not the competitor you are obsessed with. Then you list the unique attributes you have that the alternatives do not, and you map those to value.

April Dunford (00:09:05):
The next step is your best-fit customers. These are the people who care a lot about the value only you deliver. My advice is to write down exactly who they are and ignore everyone else for now. Founders hate this because it feels like shrinking the market, but a niche you can win is worth more than a mass market you cannot.

Lenny (00:14:22):
What is the most common mistake you see?

April Dunford (00:14:30):
The biggest mistake is picking a market category that makes your strengths invisible. If you call yourself a CRM, buyers compare you to every CRM on the planet and your differentiated value disappears. The key is to choose a frame of reference where your value is obvious to the best-fit customers.

April Dunford (00:21:18):
Sales pitches follow from positioning. You should open with the insight about the market, not with your product. Then show the alternatives and why they fall short, then your unique value, then proof. A sales team that tells that story consistently wins more deals.

April Dunford (00:28:47):
People ask whether positioning is a marketing thing. It is a company thing. Product, sales and marketing all have to agree, otherwise every team tells a different story. I believe positioning should be revisited every time the market shifts under you.
"#,
    },
    SampleEpisode {
        folder: "brian-chesky",
        guest: "Brian Chesky",
        title: "Brian Chesky's new playbook",
        video_id: "4ef0juAMqoE",
        description: "Airbnb's CEO on founder mode, the 11-star experience and running the company like a product.",
        duration_seconds: 5_730,
        view_count: 512_004,
        body: r#"
Lenny (00:00:00):
Brian, thank you for being here. A lot of people have been talking about founder mode since your talk.

Brian Chesky (00:00:15):
Thank you for having me. Founder mode is really a reaction to the advice I got early on. Everyone told me to hire great people and get out of their way. I did that, and the company drifted. Leaders were managing managers, and nobody was looking at the product anymore.

Brian Chesky (00:04:32):
So I went back into founder mode. I stay in the details now. I review every major screen, every launch, every piece of copy. People call it micromanaging, but I think the details are the product. If the CEO is not in the details, who is?

Brian Chesky (00:09:48):
We also changed how we plan. We used to have dozens of teams each with their own roadmap. Now we ship two big releases a year and the whole company works on one roadmap. Every project has a clear owner, and I review them weekly.

Lenny (00:13:10):
Talk about the 11-star experience. How did that start?

Brian Chesky (00:13:20):
The 11-star experience is an exercise we did in the early days. You imagine a five-star check-in: the host opens the door, the place is clean. Then a six-star experience: there is a handwritten welcome note. A seven-star experience: the host picks you up at the airport. By the time you get to an 11-star experience, you are being launched into space. Obviously you cannot build that, but somewhere between seven and nine stars there is something magical and feasible.

Brian Chesky (00:19:55):
The key is that designers and engineers work on the same story. We storyboard the entire customer journey, frame by frame, like a Pixar film. That forces you to think about the emotional moments and the quality of each step, not just the features.

Brian Chesky (00:26:40):
On hiring, my advice is to hire people who are better than you at their craft, but stay close to the details of their work. Those two ideas are not in conflict. You can trust people and still look at what they are building every single week.

Lenny (00:31:05):
What about data? Airbnb is known for experimentation.

Brian Chesky (00:31:12):
We run experiments, but I think the industry became too data-driven. Data tells you what happened, it does not tell you what to build. You need taste and intuition to decide where to go, and then you can use data to check whether you got there. A/B tests are great for optimizing a button, they are terrible at inventing a new category.

Brian Chesky (00:38:27):
The biggest lesson from the pandemic was focus. We cut most of our projects and put everyone on the core business. Speed came back, quality came back. It turns out a small number of people who really care can do more than a large organization that does not.

Brian Chesky (00:44:03):
If I could tell founders one thing, it would be this. Do not let anyone convince you that being involved is a weakness. You should know your product better than anyone in the company. That is founder mode.
"#,
    },
    SampleEpisode {
        folder: "elena-verna",
        guest: "Elena Verna",
        title: "The ultimate guide to product-led growth",
        video_id: "hyQu3E2hqGk",
        description: "Growth advisor Elena Verna on reverse trials, freemium, growth loops and when to add sales.",
        duration_seconds: 4_980,
        view_count: 96_730,
        body: r#"
Lenny (00:00:00):
Elena, you have helped dozens of companies with product-led growth. Where do people usually get it wrong?

Elena Verna (00:00:14):
Most companies think product-led growth means adding a free plan. It does not. Product-led means the product is the main way people discover, adopt and expand. Freemium is one tool, a free trial is another, and the reverse trial is my favorite.

Elena Verna (00:04:51):
A reverse trial gives every new user the premium tier for fourteen days, and then drops them to the free plan instead of locking them out. Users experience the full value, and when they lose it, a meaningful share of them upgrade. The ones who do not upgrade stay active on free, which feeds your growth loops.

Elena Verna (00:10:36):
Growth loops are how I think about acquisition. A user creates something, shares it, a new user sees it and signs up. Content loops, viral loops, paid loops. Funnels describe a one-time journey; loops compound. The key is to find the one loop that actually drives most of your new users and invest there.

Lenny (00:16:02):
Does product-led growth mean you never need a sales team?

Elena Verna (00:16:10):
No, and this is the most important thing people miss. The best companies are product-led at the bottom and sales-led at the top. Self-serve gets you adoption inside an organization. Then your sales team shows up when there are fifty active users in one account and helps them expand. Enterprise sales without product usage is just cold calling.

Elena Verna (00:22:44):
Activation is the metric I care about most. If users do not reach the aha moment in the first session, retention will be terrible no matter how good your acquisition is. You should instrument the first session obsessively and run experiments on it every week.

Elena Verna (00:29:18):
My advice for growth teams is to stop copying other companies. What worked for Dropbox or Slack worked because of their specific loops. Your product has its own loop, and you have to find it with data, not with a playbook.
"#,
    },
    SampleEpisode {
        folder: "marty-cagan",
        guest: "Marty Cagan",
        title: "Product management theater",
        video_id: "9N4ZgNaWvI0",
        description: "Marty Cagan on empowered teams, the four big risks and why most companies run feature factories.",
        duration_seconds: 5_120,
        view_count: 187_445,
        body: r#"
Lenny (00:00:00):
Marty, you have been writing about product teams for decades. What is the difference between a good team and a great one?

Marty Cagan (00:00:18):
The difference is whether the team is empowered. Most companies have feature teams. Stakeholders hand them a roadmap of features and the team delivers them. That is a feature factory. Empowered teams are given problems to solve and they are accountable for outcomes over output.

Marty Cagan (00:05:26):
Leaders have to delegate the decisions to the people closest to the technology and the customers. You give them strategic context, you coach them, and then you trust the team to figure out the solution. If leaders make every decision, you do not need product managers at all.

Marty Cagan (00:11:40):
Product discovery is about tackling the four big risks before you write production code. Value risk: will customers buy it? Usability risk: can they figure out how to use it? Feasibility risk: can engineers build it? Business viability risk: does it work for the rest of the business? You should test all four with prototypes, quickly and cheaply.

Lenny (00:17:55):
Some founders say you should stay in the details rather than delegate. How do you square that?

Marty Cagan (00:18:06):
Strong founders are great at product, so of course they are involved. But there is a difference between coaching teams and taking every decision away from them. The most important thing a leader does is hire and develop people who can make those decisions without them. If you cannot trust your people, that is a hiring problem, not a delegation problem.

Marty Cagan (00:24:33):
Product managers in empowered teams need deep knowledge of the customer, the data, the business and the industry. I believe most product management theater comes from companies that never gave their product managers a chance to build that knowledge.

Marty Cagan (00:30:12):
Roadmaps are the biggest source of waste I see. A quarterly plan full of features assumes you already know what will work. Half of those ideas will not work, and the team only learns that after shipping. My advice is to replace feature roadmaps with business objectives and let the teams discover the solutions.
"#,
    },
    SampleEpisode {
        folder: "shreyas-doshi",
        guest: "Shreyas Doshi",
        title: "The art of product management",
        video_id: "YP_QghPLG-8",
        description: "Shreyas Doshi on the LNO framework, pre-mortems and the three levels of product work.",
        duration_seconds: 6_015,
        view_count: 233_981,
        body: r#"
Lenny (00:00:00):
Shreyas, you have shared so many frameworks online. Which one do people ask you about most?

Shreyas Doshi (00:00:16):
Probably the LNO framework. Every task is either leverage, neutral or overhead. Leverage tasks have ten times the impact if you do them well. Neutral tasks are roughly proportional, and overhead tasks barely matter how well you do them. The LNO framework is about spending your best energy on leverage tasks and being comfortable doing overhead tasks poorly.

Shreyas Doshi (00:06:42):
The common mistake is that people try to do every task perfectly. They end up with no time for the leverage work, like writing the strategy or talking to customers. Using LNO, you accept that some things will be average, and that is fine.

Shreyas Doshi (00:12:30):
Another tool I use with every team is the pre-mortem. Before a big launch, you gather the team and imagine it is six months later and the project failed. Everyone writes down why it failed. Then you sort those reasons into tigers, paper tigers and elephants. The pre-mortem surfaces risks people were afraid to say out loud.

Lenny (00:18:21):
You also talk about three levels of product work.

Shreyas Doshi (00:18:29):
Yes, the three levels of product work are impact, execution and optics. Most disagreements inside companies happen because people are talking at different levels. An executive is thinking about impact, the PM is thinking about execution, and someone else is worried about optics. The key is to notice which level each person is at before you argue.

Shreyas Doshi (00:25:47):
On metrics, I think teams over-rotate on data. Data is essential, but it cannot replace judgment. The best product managers develop taste and product sense, and they use data to sharpen their intuition rather than replace it.

Shreyas Doshi (00:31:10):
My advice to new product managers is to pick one leverage task each week and do it exceptionally well. Over a year, that compounds into a very different career than trying to be good at everything.
"#,
    },
];
