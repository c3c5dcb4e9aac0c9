use crate::core::synthesizer::TextSynthesizer;
use crate::domain::model::PopulationReport;
use crate::domain::ports::{CommentApi, IndexSource};

const BANNER_WIDTH: usize = 70;
const EXCERPT_LEN: usize = 50;

fn excerpt(text: &str) -> String {
    text.chars().take(EXCERPT_LEN).collect()
}

/// Drives the two-level creation loop: N top-level comments, M replies under
/// each. Strictly sequential; every call completes before the next one is
/// issued, and a failed comment skips its whole reply batch since there is
/// no parent to attach them to.
pub struct PopulationEngine<'a, A: CommentApi, R: IndexSource> {
    api: A,
    synthesizer: TextSynthesizer<'a, R>,
}

impl<'a, A: CommentApi, R: IndexSource> PopulationEngine<'a, A, R> {
    pub fn new(api: A, synthesizer: TextSynthesizer<'a, R>) -> Self {
        Self { api, synthesizer }
    }

    pub async fn run(
        &mut self,
        request_id: &str,
        num_comments: usize,
        num_replies: usize,
    ) -> PopulationReport {
        let separator = "=".repeat(BANNER_WIDTH);
        println!("\n{}", separator);
        println!("Populating request: {}", request_id);
        println!(
            "Creating {} comments with {} replies each",
            num_comments, num_replies
        );
        println!("Total items: {}", num_comments + num_comments * num_replies);
        println!("{}\n", separator);

        let mut report = PopulationReport::default();

        for i in 0..num_comments {
            let content = self.synthesizer.comment();
            report.comments_attempted += 1;

            // 評論失敗就整批跳過回覆
            let comment = match self.api.create_comment(request_id, &content).await {
                Ok(comment) => {
                    report.comments_created += 1;
                    tracing::info!("✓ Created comment #{}: {}...", i + 1, excerpt(&content));
                    comment
                }
                Err(e) => {
                    tracing::warn!("✗ Failed to create comment #{}: {}", i + 1, e);
                    continue;
                }
            };

            if num_replies > 0 {
                tracing::debug!("Creating {} replies for comment #{}", num_replies, i + 1);
            }

            for j in 0..num_replies {
                let reply_content = self.synthesizer.reply();
                report.replies_attempted += 1;

                match self
                    .api
                    .create_reply(request_id, &comment.id, &reply_content)
                    .await
                {
                    Ok(_) => {
                        report.replies_created += 1;
                        tracing::info!("  ✓ Created reply: {}...", excerpt(&reply_content));
                    }
                    Err(e) => {
                        tracing::warn!(
                            "  ✗ Failed to create reply #{} for comment #{}: {}",
                            j + 1,
                            i + 1,
                            e
                        );
                    }
                }
            }
        }

        println!("\n{}", separator);
        println!("SUMMARY");
        println!("{}", separator);
        println!("✓ Created {} top-level comments", report.comments_created);
        println!("✓ Created {} replies", report.replies_created);
        println!("✓ Total: {} items", report.total_created());
        println!("{}\n", separator);

        report
    }
}
