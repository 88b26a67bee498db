use super::ServiceDetail;

pub(super) fn lookup(id: &str) -> Option<&'static ServiceDetail> {
    match id {
        "opensearch" => Some(&OPENSEARCH),
        "bedrock" => Some(&BEDROCK),
        _ => None,
    }
}

static OPENSEARCH: ServiceDetail = ServiceDetail {
    title: "Amazon OpenSearch Service Deep Dive",
    description: "Comprehensive vector database capabilities for semantic search and analytics.",
    features: &[
        "k-NN vector search with FAISS, Hierarchical Navigable Small World (HNSW)",
        "Hybrid queries combining text search with vector similarity",
        "Multiple distance metrics (L2, cosine, L1)",
        "Index warming and performance optimization",
        "Integration with machine learning pipelines",
    ],
    pricing: "Starting at $0.088/hour for t3.small.search instances",
    use_cases: &[
        "Enterprise document search",
        "E-commerce product discovery",
        "Content recommendation systems",
        "Fraud detection and anomaly analysis",
    ],
};

static BEDROCK: ServiceDetail = ServiceDetail {
    title: "Amazon Bedrock Knowledge Bases",
    description: "Fully managed RAG service with automatic embeddings and vector storage.",
    features: &[
        "Automatic text embedding with Titan or Cohere models",
        "Managed OpenSearch Serverless backend",
        "Built-in chunking strategies for documents",
        "Native integration with foundation models",
        "No infrastructure management required",
    ],
    pricing: "Pay-per-use: $0.0001 per 1K input tokens for embeddings",
    use_cases: &[
        "Customer support chatbots",
        "Internal knowledge assistants",
        "Document Q&A systems",
        "Technical documentation search",
    ],
};
